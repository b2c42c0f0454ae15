use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::{debug, info, instrument};

use crate::{
    dto::{AddDomainRequest, AddDomainResponse, DomainsResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/domains", get(get_domains).post(add_domain))
}

#[instrument(skip(state), name = "api_get_domains")]
async fn get_domains(State(state): State<AppState>) -> Result<Json<DomainsResponse>, ApiError> {
    let list = state.get_domains.execute().await?;
    debug!(count = list.len(), "Domain list retrieved");
    Ok(Json(list.into()))
}

#[instrument(skip(state), name = "api_add_domain")]
async fn add_domain(
    State(state): State<AppState>,
    Json(req): Json<AddDomainRequest>,
) -> Result<(StatusCode, Json<AddDomainResponse>), ApiError> {
    let domain = state.add_domain.execute(&req.domain).await?;
    info!(domain = %domain, "Domain added via API");
    Ok((
        StatusCode::CREATED,
        Json(AddDomainResponse {
            success: true,
            domain,
        }),
    ))
}
