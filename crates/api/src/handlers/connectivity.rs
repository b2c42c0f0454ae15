use axum::{extract::State, response::Json, routing::get, Router};
use repwatch_application::use_cases::ConnectivityReport;
use tracing::instrument;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/connection-status", get(get_connection_status))
}

#[instrument(skip(state), name = "api_get_connection_status")]
async fn get_connection_status(State(state): State<AppState>) -> Json<ConnectivityReport> {
    Json(state.check_connectivity.execute().await)
}
