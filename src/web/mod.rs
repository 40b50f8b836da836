//! Interactive surface: axum handlers rendering askama templates per request.

pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod templates;

pub use router::app_router;
pub use state::AppState;
