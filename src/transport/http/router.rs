use crate::transport::http::handlers::{accounts, balance, health, mint, transfer};
use crate::transport::http::types::{
    BalanceResponse, CreateAtaRequest, CreateAtaResponse, ErrorResponse, HealthResponse,
    MintRequest, PrepareTransferRequest, PrepareTransferResponse, ServerTransferRequest,
    SignedTxResponse,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, HttpMakeClassifier, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root_handler,
        health::healthcheck_handler,
        balance::balance_handler,
        accounts::create_ata_handler,
        mint::mint_handler,
        transfer::prepare_transfer_handler,
        transfer::server_transfer_handler
    ),
    components(schemas(
        HealthResponse,
        BalanceResponse,
        CreateAtaRequest,
        CreateAtaResponse,
        MintRequest,
        SignedTxResponse,
        PrepareTransferRequest,
        PrepareTransferResponse,
        ServerTransferRequest,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/balance/:address", get(balance::balance_handler))
        .route("/create-ata", post(accounts::create_ata_handler))
        .route("/mint", post(mint::mint_handler))
        .route("/prepare-transfer", post(transfer::prepare_transfer_handler))
        .route("/transfer", post(transfer::server_transfer_handler))
        .with_state(app_state)
}

/// Per-request logging (method, URI, status, latency) at INFO.
pub fn trace_layer() -> TraceLayer<HttpMakeClassifier, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
