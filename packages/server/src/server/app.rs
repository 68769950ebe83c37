//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::SharedExtractor;
use crate::server::routes::{
    create_note_handler, extract_handler, extract_llm_handler, get_note_handler,
    health_handler, list_action_items_handler, list_notes_handler, mark_done_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub extractor: SharedExtractor,
}

/// Build the Axum application router
pub fn build_app(pool: SqlitePool, extractor: SharedExtractor) -> Router {
    let app_state = AppState {
        db_pool: pool,
        extractor,
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/notes", post(create_note_handler).get(list_notes_handler))
        .route("/notes/:id", get(get_note_handler))
        .route("/action-items", get(list_action_items_handler))
        .route("/action-items/extract", post(extract_handler))
        .route("/action-items/extract-llm", post(extract_llm_handler))
        .route("/action-items/:id/done", post(mark_done_handler))
        .route("/health", get(health_handler))
        // Middleware layers (ServiceBuilder applies top to bottom)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(Extension(app_state)),
        )
}
