//! Command-line stand-in for the browser wallet UI.
//!
//! `transfer` performs the same round trip the web page does with Phantom:
//! ask the backend for an unsigned transaction, sign it locally, submit it
//! straight to the validator.

use clap::{Parser, Subcommand};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::VersionedTransaction;

use spl_token_demo::domain::token::{decode_transaction, parse_pubkey};
use spl_token_demo::solana::load_keypair;
use spl_token_demo::BackendClient;

#[derive(Parser)]
#[command(name = "wallet-cli", about = "Talk to the token demo backend like the web wallet does")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:3001")]
    backend: String,

    /// Validator RPC used to submit signed transfers.
    #[arg(long, env = "SOLANA_RPC_URL", default_value = "http://127.0.0.1:8899")]
    rpc: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the token balance of a wallet.
    Balance { address: String },
    /// Create a wallet's associated token account (server pays).
    CreateAta { owner: String },
    /// Mint tokens to a wallet.
    Mint {
        recipient: String,
        #[arg(long, default_value_t = 100)]
        amount: u64,
    },
    /// Prepare, sign and submit a transfer from a local keypair.
    Transfer {
        /// Keypair file of the sending wallet.
        #[arg(long)]
        keypair: String,
        recipient: String,
        #[arg(long, default_value_t = 10)]
        amount: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let backend = BackendClient::new(cli.backend.clone())?;

    match cli.command {
        Command::Balance { address } => {
            let owner = parse_pubkey(&address)?;
            let resp = backend.balance(&owner).await?;
            println!("Balance: {} tokens", resp.balance);
            println!("ATA: {}", resp.ata);
        }
        Command::CreateAta { owner } => {
            let owner = parse_pubkey(&owner)?;
            let resp = backend.create_ata(&owner).await?;
            println!("ATA: {}", resp.ata);
            println!("Tx: {}", resp.tx_sig);
        }
        Command::Mint { recipient, amount } => {
            let recipient = parse_pubkey(&recipient)?;
            let resp = backend.mint(&recipient, amount).await?;
            println!("Minted {} tokens", amount);
            println!("Tx: {}", resp.tx_sig);
            println!("ATA: {}", resp.ata);
            let balance = backend.balance(&recipient).await?;
            println!("Balance: {} tokens", balance.balance);
        }
        Command::Transfer {
            keypair,
            recipient,
            amount,
        } => {
            let wallet = load_keypair(&keypair, "wallet")?;
            let recipient = parse_pubkey(&recipient)?;

            println!("Preparing transfer of {} tokens...", amount);
            let prepared = backend
                .prepare_transfer(&wallet.pubkey(), &recipient, amount)
                .await?;
            let unsigned = decode_transaction(&prepared.tx_base64)?;
            let signed = VersionedTransaction::try_new(unsigned.message, &[&wallet])?;

            let rpc = RpcClient::new_with_commitment(cli.rpc.clone(), CommitmentConfig::confirmed());
            let signature = rpc.send_and_confirm_transaction(&signed).await?;
            println!("Transfer sent!");
            println!("Tx: {}", signature);

            let sender_balance = backend.balance(&wallet.pubkey()).await?;
            let recipient_balance = backend.balance(&recipient).await?;
            println!("Sender balance: {} tokens", sender_balance.balance);
            println!("Recipient balance: {} tokens", recipient_balance.balance);
        }
    }

    Ok(())
}
