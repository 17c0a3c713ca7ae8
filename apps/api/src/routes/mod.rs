pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/modes", get(handlers::handle_list_modes))
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/start", post(handlers::handle_start))
        .route("/api/v1/session/respond", post(handlers::handle_respond))
        .route("/api/v1/session/finish", post(handlers::handle_finish))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        .with_state(state)
}
