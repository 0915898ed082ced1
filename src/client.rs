//! Typed HTTP client for the backend routes, used by `wallet-cli`.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;

use crate::transport::http::types::{
    BalanceResponse, CreateAtaResponse, ErrorResponse, HealthResponse, PrepareTransferResponse,
    SignedTxResponse,
};

pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub async fn health(&self) -> anyhow::Result<HealthResponse> {
        let resp = self.http.get(format!("{}/health", self.base_url)).send().await?;
        decode(resp).await
    }

    pub async fn balance(&self, owner: &Pubkey) -> anyhow::Result<BalanceResponse> {
        let resp = self
            .http
            .get(format!("{}/balance/{}", self.base_url, owner))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create_ata(&self, owner: &Pubkey) -> anyhow::Result<CreateAtaResponse> {
        let resp = self
            .http
            .post(format!("{}/create-ata", self.base_url))
            .json(&json!({ "owner": owner.to_string() }))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn mint(&self, recipient: &Pubkey, amount: u64) -> anyhow::Result<SignedTxResponse> {
        let resp = self
            .http
            .post(format!("{}/mint", self.base_url))
            .json(&json!({ "recipient": recipient.to_string(), "amount": amount }))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn prepare_transfer(
        &self,
        sender: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> anyhow::Result<PrepareTransferResponse> {
        let resp = self
            .http
            .post(format!("{}/prepare-transfer", self.base_url))
            .json(&json!({
                "sender": sender.to_string(),
                "recipient": recipient.to_string(),
                "amount": amount,
            }))
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> anyhow::Result<T> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }
    let message = match resp.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => "unreadable error body".to_string(),
    };
    Err(anyhow::anyhow!("backend returned {}: {}", status, message))
}
