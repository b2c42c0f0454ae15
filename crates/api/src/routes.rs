use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::domains::routes())
        .merge(handlers::results::routes())
        .merge(handlers::connectivity::routes())
        .with_state(state)
}
