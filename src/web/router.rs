use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::web::handlers::{all_stories, health, index, talk_form, talk_submit};
use crate::web::state::AppState;

pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/all", get(all_stories))
        .route("/talk", get(talk_form).post(talk_submit))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
