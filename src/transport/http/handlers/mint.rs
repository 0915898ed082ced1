use crate::domain::token::{parse_amount, parse_pubkey};
use crate::error::ApiError;
use crate::transport::http::handlers::common::{json_body, required, required_amount};
use crate::transport::http::types::{AppState, ErrorResponse, MintRequest, SignedTxResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use solana_sdk::pubkey::Pubkey;

// Presence of every field is checked before any of them is parsed.
fn parse_request(request: &MintRequest) -> Result<(Pubkey, u64), ApiError> {
    let recipient = required(&request.recipient)?;
    let amount = required_amount(&request.amount)?;
    Ok((parse_pubkey(recipient)?, parse_amount(amount)?))
}

#[utoipa::path(
    post,
    path = "/mint",
    request_body = MintRequest,
    responses(
        (status = 200, description = "Tokens minted to the recipient's associated account", body = SignedTxResponse),
        (status = 400, description = "Missing recipient or amount", body = ErrorResponse),
        (status = 500, description = "Invalid input or RPC failure", body = ErrorResponse)
    )
)]
pub async fn mint_handler(
    State(state): State<AppState>,
    request: Result<Json<MintRequest>, JsonRejection>,
) -> impl IntoResponse {
    let (recipient, amount) = match json_body(request).and_then(|r| parse_request(&r)) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match state.token_service.mint_to(&recipient, amount).await {
        Ok((ata, signature)) => (
            StatusCode::OK,
            Json(SignedTxResponse {
                success: true,
                tx_sig: signature.to_string(),
                ata: ata.to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
