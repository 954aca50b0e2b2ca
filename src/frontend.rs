//! The front end
//!
//! Every request outside of the API is served from the static directory. Paths
//! without a matching file get `index.html`, so the single-page app can do its
//! own routing.

use std::path::Path;

use tower_http::services::ServeDir;
use tower_http::services::ServeFile;

/// Name of the entry point of the front end
const INDEX_FILE: &str = "index.html";

/// Service for the static files of the front end
pub fn service(static_dir: &Path) -> ServeDir<ServeFile> {
    let index = static_dir.join(INDEX_FILE);

    if !index.is_file() {
        tracing::warn!(
            "No front end found at {}, only the API is available",
            index.display()
        );
    }

    ServeDir::new(static_dir).fallback(ServeFile::new(index))
}
