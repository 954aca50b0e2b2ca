#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::api::router;
use crate::storage::Store;
use crate::storage::StoreConfig;
use crate::utils::env_var;
use crate::utils::env_var_or_else;

mod api;
mod categories;
mod frontend;
mod graceful_shutdown;
mod notes;
mod storage;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "notekeeper=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "client/build";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let static_dir = setup_static_dir();
    let app = setup_app(StoreConfig::DetectConfig, &static_dir);

    let address = setup_address()?;
    let listener = TcpListener::bind(address).await?;

    tracing::info!("Listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its dependencies
///
/// The store lives as long as the returned router
pub fn setup_app(config: StoreConfig, static_dir: &Path) -> Router {
    let store = Store::from_config(config);

    create_router(store, static_dir)
}

/// Create the router for Notekeeper
fn create_router(store: Store, static_dir: &Path) -> Router {
    Router::new()
        .nest("/api", router())
        .fallback_service(frontend::service(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(store))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(env_var_or_else("RUST_LOG", || {
            DEFAULT_RUST_LOG.into()
        })))
        .with(fmt::layer())
        .init();
}

fn setup_static_dir() -> PathBuf {
    let static_dir = PathBuf::from(env_var_or_else("STATIC_DIR", || {
        String::from(DEFAULT_STATIC_DIR)
    }));

    tracing::info!("Serving front end from {}", static_dir.display());

    static_dir
}

fn setup_address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS)).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Some(port) = env_var("PORT") {
        address.set_port(port.parse::<u16>()?);
    }

    Ok(address)
}
