//! The seam between the token service and the network.

use async_trait::async_trait;
use solana_sdk::{hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction};

use crate::error::ApiError;

/// The handful of RPC calls the token service needs.
///
/// Production uses [`crate::infra::solana::RpcTokenChain`]; tests swap in an
/// in-memory ledger.
#[async_trait]
pub trait TokenChain: Send + Sync {
    async fn latest_blockhash(&self) -> Result<Hash, ApiError>;

    /// Raw token amount held by `token_account`, or `None` if the account
    /// does not exist on chain.
    async fn token_balance(&self, token_account: &Pubkey) -> Result<Option<u64>, ApiError>;

    /// Submits a fully signed transaction and waits for `confirmed` commitment.
    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ApiError>;
}
