use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Plain-text liveness banner", body = String)
    )
)]
pub async fn root_handler() -> &'static str {
    "Token-2022 backend is running"
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Keys the service operates with", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let identity = state.token_service.identity();
    (
        StatusCode::OK,
        Json(HealthResponse {
            success: true,
            mint: identity.mint.to_string(),
            fee_payer: identity.fee_payer.to_string(),
            mint_authority: identity.mint_authority.to_string(),
            sender: identity.sender.map(|k| k.to_string()),
        }),
    )
}
