pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod accounts;
    pub mod balance;
    pub mod common;
    pub mod health;
    pub mod mint;
    pub mod transfer;
}

pub use router::{create_router, trace_layer, ApiDoc};
pub use types::AppState;
