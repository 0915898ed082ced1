use crate::transport::http::handlers::common::{json_body, required_pubkey};
use crate::transport::http::types::{AppState, CreateAtaRequest, CreateAtaResponse, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/create-ata",
    request_body = CreateAtaRequest,
    responses(
        (status = 200, description = "Associated token account exists (created if needed)", body = CreateAtaResponse),
        (status = 400, description = "Missing owner", body = ErrorResponse),
        (status = 500, description = "Invalid owner or RPC failure", body = ErrorResponse)
    )
)]
pub async fn create_ata_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateAtaRequest>, JsonRejection>,
) -> impl IntoResponse {
    let owner = match json_body(request).and_then(|r| required_pubkey(&r.owner)) {
        Ok(k) => k,
        Err(e) => return e.into_response(),
    };

    match state.token_service.create_ata(&owner).await {
        Ok((ata, signature)) => (
            StatusCode::OK,
            Json(CreateAtaResponse {
                success: true,
                ata: ata.to_string(),
                tx_sig: signature.to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
