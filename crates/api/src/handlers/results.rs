use axum::{extract::State, response::Json, routing::get, Router};
use repwatch_domain::ResultStore;
use tracing::{debug, instrument};

use crate::{errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/security-results", get(get_security_results))
}

/// The stored mapping as-is: domain -> `{google_status, spamhaus_status, timestamp}`.
#[instrument(skip(state), name = "api_get_security_results")]
async fn get_security_results(
    State(state): State<AppState>,
) -> Result<Json<ResultStore>, ApiError> {
    let store = state.get_results.execute().await?;
    debug!(records = store.len(), "Security results retrieved");
    Ok(Json(store))
}
