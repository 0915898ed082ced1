//! Centralized configuration (environment variables + defaults).

use axum::http::HeaderValue;
use solana_sdk::pubkey::Pubkey;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_MINT_ADDRESS: &str = "6ZPwB5MJD57J2NeVbMzVjtBpc5zFBDSbH6MRRZCV4rWL";
pub const DEFAULT_FEE_PAYER_KEYPAIR: &str = "~/.config/solana/id.json";
pub const DEFAULT_MINT_AUTHORITY_KEYPAIR: &str = "~/.config/solana/mintAuthority.json";
pub const DEFAULT_SENDER_KEYPAIR: &str = "~/.config/solana/sender.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Config {
    /// Solana JSON-RPC endpoint of the validator.
    pub rpc_url: String,
    /// The Token-2022 mint every endpoint operates on.
    pub mint: Pubkey,
    pub fee_payer_keypair: String,
    pub mint_authority_keypair: String,
    /// Optional; the server runs without a sender if the file is absent.
    pub sender_keypair: String,
    pub bind_addr: SocketAddr,
    /// Origin allowed by CORS (the web UI dev server).
    pub cors_origin: HeaderValue,
}

impl Config {
    /// Reads the process environment. Binaries load `.env` first.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let mint_str = var("MINT_ADDRESS", DEFAULT_MINT_ADDRESS);
        let mint = Pubkey::from_str(&mint_str)
            .map_err(|e| anyhow::anyhow!("MINT_ADDRESS is not a valid pubkey '{}': {}", mint_str, e))?;

        let bind_str = var("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = SocketAddr::from_str(&bind_str)
            .map_err(|e| anyhow::anyhow!("BIND_ADDR is not a valid socket address '{}': {}", bind_str, e))?;

        let origin_str = var("CORS_ORIGIN", DEFAULT_CORS_ORIGIN);
        let cors_origin = HeaderValue::from_str(&origin_str)
            .map_err(|e| anyhow::anyhow!("CORS_ORIGIN is not a valid origin '{}': {}", origin_str, e))?;

        Ok(Self {
            rpc_url: var("SOLANA_RPC_URL", DEFAULT_RPC_URL),
            mint,
            fee_payer_keypair: var("FEE_PAYER_KEYPAIR", DEFAULT_FEE_PAYER_KEYPAIR),
            mint_authority_keypair: var("MINT_AUTHORITY_KEYPAIR", DEFAULT_MINT_AUTHORITY_KEYPAIR),
            sender_keypair: var("SENDER_KEYPAIR", DEFAULT_SENDER_KEYPAIR),
            bind_addr,
            cors_origin,
        })
    }
}
