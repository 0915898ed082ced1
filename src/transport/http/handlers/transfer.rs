use crate::domain::token::{parse_amount, parse_pubkey};
use crate::error::ApiError;
use crate::transport::http::handlers::common::{json_body, required, required_amount};
use crate::transport::http::types::{
    AppState, ErrorResponse, PrepareTransferRequest, PrepareTransferResponse,
    ServerTransferRequest, SignedTxResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use solana_sdk::pubkey::Pubkey;

fn parse_prepare_request(request: &PrepareTransferRequest) -> Result<(Pubkey, Pubkey, u64), ApiError> {
    let sender = required(&request.sender)?;
    let recipient = required(&request.recipient)?;
    let amount = required_amount(&request.amount)?;
    Ok((parse_pubkey(sender)?, parse_pubkey(recipient)?, parse_amount(amount)?))
}

fn parse_server_request(request: &ServerTransferRequest) -> Result<(Pubkey, u64), ApiError> {
    let recipient = required(&request.recipient)?;
    let amount = required_amount(&request.amount)?;
    Ok((parse_pubkey(recipient)?, parse_amount(amount)?))
}

#[utoipa::path(
    post,
    path = "/prepare-transfer",
    request_body = PrepareTransferRequest,
    responses(
        (status = 200, description = "Unsigned v0 transaction for the sender's wallet to sign", body = PrepareTransferResponse),
        (status = 400, description = "Missing params or insufficient balance", body = ErrorResponse),
        (status = 500, description = "Invalid input or RPC failure", body = ErrorResponse)
    )
)]
pub async fn prepare_transfer_handler(
    State(state): State<AppState>,
    request: Result<Json<PrepareTransferRequest>, JsonRejection>,
) -> impl IntoResponse {
    let (sender, recipient, amount) = match json_body(request).and_then(|r| parse_prepare_request(&r)) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match state
        .token_service
        .prepare_transfer(&sender, &recipient, amount)
        .await
    {
        Ok(tx_base64) => (
            StatusCode::OK,
            Json(PrepareTransferResponse {
                success: true,
                tx_base64,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/transfer",
    request_body = ServerTransferRequest,
    responses(
        (status = 200, description = "Transfer signed by the server sender and confirmed", body = SignedTxResponse),
        (status = 400, description = "Missing params or insufficient balance", body = ErrorResponse),
        (status = 500, description = "No sender configured, invalid input or RPC failure", body = ErrorResponse)
    )
)]
pub async fn server_transfer_handler(
    State(state): State<AppState>,
    request: Result<Json<ServerTransferRequest>, JsonRejection>,
) -> impl IntoResponse {
    let (recipient, amount) = match json_body(request).and_then(|r| parse_server_request(&r)) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match state.token_service.server_transfer(&recipient, amount).await {
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
