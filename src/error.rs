//! Error type shared by the domain, service and HTTP layers.

use solana_client::client_error::ClientError;
use solana_sdk::message::CompileError;
use solana_sdk::program_error::ProgramError;
use solana_sdk::pubkey::ParsePubkeyError;
use solana_sdk::signer::SignerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required body field was absent or empty.
    #[error("Missing params")]
    MissingParams,

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Server sender keypair is not configured")]
    SenderNotConfigured,

    #[error("Invalid public key input '{0}': {1}")]
    InvalidAddress(String, ParsePubkeyError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error(transparent)]
    Rpc(#[from] ClientError),

    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error("Failed to compile transaction message: {0}")]
    Compile(#[from] CompileError),

    #[error("Failed to sign transaction: {0}")]
    Signing(#[from] SignerError),

    #[error("Transaction encoding failed: {0}")]
    Encoding(String),
}

impl ApiError {
    /// Validation failures the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::MissingParams | ApiError::InvalidBody(_) | ApiError::InsufficientBalance
        )
    }
}
