use crate::db::Storage;
use crate::handlers::{catalog, contact};
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Shared state for the HTTP layer: the storage façade behind the trait
/// object, injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

/// Builds the application router: the three API operations, plus the built
/// single-page client served as the fallback when `static_dir` is set
/// (unknown paths fall through to `index.html` for client-side routing).
pub fn folio_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/api/projects", get(catalog::list_projects))
        .route("/api/skills", get(catalog::list_skills))
        .route("/api/contact", post(contact::create_message))
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
