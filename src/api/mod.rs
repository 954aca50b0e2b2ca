//! All API endpoint setup

use axum::Router;
use axum::routing::get;
use axum::routing::patch;

pub use request::Form;
pub use request::PathParameters;
pub use request::trimmed;
pub use response::Error;
pub use response::Success;

mod categories;
mod notes;
mod request;
mod response;

/// Get the Axum router for all API routes
pub fn router() -> Router {
    let notes = Router::new()
        .route("/", get(notes::list).post(notes::create))
        .route(
            "/{note}",
            get(notes::single).put(notes::update).delete(notes::delete),
        )
        .route("/{note}/toggle", patch(notes::toggle));

    let categories = Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{category}",
            get(categories::single)
                .put(categories::update)
                .delete(categories::delete),
        );

    Router::new()
        .nest("/notes", notes)
        .nest("/categories", categories)
        .fallback(not_found)
}

/// Unknown API routes never reach the front end
async fn not_found() -> Error {
    Error::not_found("Not found")
}
