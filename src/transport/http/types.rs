use crate::app::TokenService;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
}

// Request bodies keep every field optional so a missing field is reported
// as "Missing params" (400) instead of a deserialization failure.

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct CreateAtaRequest {
    /// Wallet public key (base58) that will own the token account.
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct MintRequest {
    #[serde(default)]
    pub recipient: Option<String>,
    /// Raw token amount, as a JSON integer or a decimal string.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub amount: Option<JsonValue>,
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct PrepareTransferRequest {
    /// Wallet that signs and pays for the transfer.
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub amount: Option<JsonValue>,
}

#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct ServerTransferRequest {
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub amount: Option<JsonValue>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub mint: String,
    pub fee_payer: String,
    pub mint_authority: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct BalanceResponse {
    pub success: bool,
    pub ata: String,
    /// Raw amount as a decimal string; `"0"` when the account does not exist.
    pub balance: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAtaResponse {
    pub success: bool,
    pub ata: String,
    pub tx_sig: String,
}

/// Returned by both `/mint` and the server-side `/transfer`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedTxResponse {
    pub success: bool,
    pub tx_sig: String,
    /// Recipient's associated token account.
    pub ata: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrepareTransferResponse {
    pub success: bool,
    /// Unsigned, bincode-serialized v0 transaction, standard base64.
    pub tx_base64: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
