use crate::domain::token::parse_pubkey;
use crate::transport::http::types::{AppState, BalanceResponse, ErrorResponse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/balance/{address}",
    params(
        ("address" = String, Path, description = "Wallet public key (base58)")
    ),
    responses(
        (status = 200, description = "Token balance of the wallet's associated account", body = BalanceResponse),
        (status = 500, description = "Invalid address or RPC failure", body = ErrorResponse)
    )
)]
pub async fn balance_handler(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> impl IntoResponse {
    let owner = match parse_pubkey(&address) {
        Ok(k) => k,
        Err(e) => return e.into_response(),
    };

    match state.token_service.balance(&owner).await {
        Ok((ata, amount)) => (
            StatusCode::OK,
            Json(BalanceResponse {
                success: true,
                ata: ata.to_string(),
                balance: amount.to_string(),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
