use axum::Json;
use tracing::{debug, instrument};

use crate::dto::HealthResponse;

#[instrument(skip_all)]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse { status: "ok" })
}
