#![allow(dead_code)]

use async_trait::async_trait;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use spl_token_demo::domain::token::associated_token_address;
use spl_token_demo::{transport, ApiError, TokenChain, TokenService};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory ledger: token balances by ATA, plus every transaction "sent".
pub struct MockChain {
    pub blockhash: Hash,
    balances: Mutex<HashMap<Pubkey, u64>>,
    sent: Mutex<Vec<Transaction>>,
    rpc_down: bool,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_from_array([42; 32]),
            balances: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            rpc_down: false,
        }
    }

    /// Every call fails like an unreachable validator.
    pub fn unreachable() -> Self {
        Self {
            rpc_down: true,
            ..Self::new()
        }
    }

    pub fn set_token_balance(&self, token_account: Pubkey, amount: u64) {
        self.balances.lock().unwrap().insert(token_account, amount);
    }

    pub fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }

    fn check_rpc(&self) -> Result<(), ApiError> {
        if self.rpc_down {
            let err: ClientError =
                ClientErrorKind::Custom("connection refused (127.0.0.1:8899)".to_string()).into();
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl TokenChain for MockChain {
    async fn latest_blockhash(&self) -> Result<Hash, ApiError> {
        self.check_rpc()?;
        Ok(self.blockhash)
    }

    async fn token_balance(&self, token_account: &Pubkey) -> Result<Option<u64>, ApiError> {
        self.check_rpc()?;
        Ok(self.balances.lock().unwrap().get(token_account).copied())
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ApiError> {
        self.check_rpc()?;
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}

pub struct TestApp {
    pub base_url: String,
    pub chain: Arc<MockChain>,
    pub mint: Pubkey,
    pub fee_payer: Pubkey,
    pub mint_authority: Pubkey,
    pub sender: Option<Pubkey>,
    pub http: reqwest::Client,
}

impl TestApp {
    pub fn ata(&self, owner: &Pubkey) -> Pubkey {
        associated_token_address(owner, &self.mint)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serves the real router on an ephemeral port backed by `chain`.
pub async fn spawn_app(chain: MockChain, with_sender: bool) -> TestApp {
    spawn_app_with(chain, with_sender, |router| router).await
}

/// Like [`spawn_app`], with `wrap` applied to the router (extra layers).
pub async fn spawn_app_with<F>(chain: MockChain, with_sender: bool, wrap: F) -> TestApp
where
    F: FnOnce(axum::Router) -> axum::Router,
{
    let chain = Arc::new(chain);
    let mint = Pubkey::new_unique();
    let fee_payer = Keypair::new();
    let mint_authority = Keypair::new();
    let sender = with_sender.then(Keypair::new);

    let app = TestApp {
        base_url: String::new(),
        chain: chain.clone(),
        mint,
        fee_payer: fee_payer.pubkey(),
        mint_authority: mint_authority.pubkey(),
        sender: sender.as_ref().map(|k| k.pubkey()),
        http: reqwest::Client::new(),
    };

    let service = TokenService::new(chain, mint, fee_payer, mint_authority, sender);
    let router = wrap(transport::http::create_router(transport::http::AppState {
        token_service: Arc::new(service),
    }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{}", addr),
        ..app
    }
}
