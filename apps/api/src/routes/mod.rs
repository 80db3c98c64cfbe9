pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Router,
};

use crate::filters::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-link",
            post(handlers::handle_generate_link),
        )
        .with_state(state)
}
