pub mod client;
pub mod keys;

pub use client::RpcTokenChain;
pub use keys::{load_keypair, load_optional_keypair};
