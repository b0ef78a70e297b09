pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/analyse",
            post(handlers::handle_analyse_upload).layer(upload_limit),
        )
        .route("/api/v1/analysis", post(handlers::handle_analyse_text))
        .with_state(state)
}
