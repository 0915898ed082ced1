pub mod app;
pub mod client;
pub mod domain;
pub mod error;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{ServiceIdentity, TokenChain, TokenService};
pub use client::BackendClient;
pub use error::ApiError;
pub use infra::config::Config;
pub use infra::solana;
