// Responsible for all communication with the Solana blockchain.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};

use crate::app::chain::TokenChain;
use crate::domain::token::unpack_token_amount;
use crate::error::ApiError;

/// [`TokenChain`] backed by a JSON-RPC node at `confirmed` commitment.
pub struct RpcTokenChain {
    client: RpcClient,
}

impl RpcTokenChain {
    pub fn new(rpc_url: String) -> Self {
        Self {
            client: RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed()),
        }
    }
}

#[async_trait]
impl TokenChain for RpcTokenChain {
    async fn latest_blockhash(&self) -> Result<Hash, ApiError> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn token_balance(&self, token_account: &Pubkey) -> Result<Option<u64>, ApiError> {
        // `get_account` reports a missing account as an error; this keeps
        // "absent" apart from real RPC failures.
        let response = self
            .client
            .get_account_with_commitment(token_account, self.client.commitment())
            .await?;
        match response.value {
            Some(account) => Ok(Some(unpack_token_amount(&account.data)?)),
            None => Ok(None),
        }
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ApiError> {
        Ok(self.client.send_and_confirm_transaction(transaction).await?)
    }
}
