pub mod chain;
pub mod token_service;

pub use chain::TokenChain;
pub use token_service::{ServiceIdentity, TokenService};
