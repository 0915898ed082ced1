// src/main.rs

use solana_sdk::signer::Signer;
use spl_token_demo::infra::{config::Config, logging};
use spl_token_demo::solana::{load_keypair, load_optional_keypair, RpcTokenChain};
use spl_token_demo::{transport, TokenService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init(logging::DEFAULT_FILTER);

    let config = Config::from_env()?;

    // --- Keypairs (loaded once, immutable for the process lifetime) ---
    let fee_payer = load_keypair(&config.fee_payer_keypair, "fee payer")?;
    let mint_authority = load_keypair(&config.mint_authority_keypair, "mint authority")?;
    let sender = load_optional_keypair(&config.sender_keypair, "sender")?;

    tracing::info!(
        fee_payer = %fee_payer.pubkey(),
        mint = %config.mint,
        mint_authority = %mint_authority.pubkey(),
        rpc_url = %config.rpc_url,
        "server starting"
    );
    match &sender {
        Some(k) => tracing::info!(sender = %k.pubkey(), "server sender loaded"),
        None => tracing::info!(path = %config.sender_keypair, "no server sender keypair; /transfer disabled"),
    }

    let chain = Arc::new(RpcTokenChain::new(config.rpc_url.clone()));
    let token_service = TokenService::new(chain, config.mint, fee_payer, mint_authority, sender);
    let app_state = transport::http::AppState {
        token_service: Arc::new(token_service),
    };

    // --- API Server ---
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(transport::http::trace_layer())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("backend listening on http://{}", listener.local_addr()?);
    tracing::info!("swagger UI available at http://{}/swagger-ui", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received");
            }
        })
        .await?;

    Ok(())
}
