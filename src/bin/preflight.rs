use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;
use spl_token_2022::extension::StateWithExtensions;
use spl_token_2022::state::Mint;

use spl_token_demo::domain::token::token_program_id;
use spl_token_demo::infra::config::Config;
use spl_token_demo::solana::{load_keypair, load_optional_keypair};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Optional env vars (defaults target a local validator):\n\
           SOLANA_RPC_URL, MINT_ADDRESS, FEE_PAYER_KEYPAIR, MINT_AUTHORITY_KEYPAIR, SENDER_KEYPAIR\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    println!("> Preflight:");
    println!("  SOLANA_RPC_URL={}", config.rpc_url);
    println!("  MINT_ADDRESS={}", config.mint);

    let fee_payer = load_keypair(&config.fee_payer_keypair, "fee payer")?;
    let mint_authority = load_keypair(&config.mint_authority_keypair, "mint authority")?;
    let sender = load_optional_keypair(&config.sender_keypair, "sender")?;

    let client = RpcClient::new_with_commitment(config.rpc_url.clone(), CommitmentConfig::confirmed());

    // Basic RPC connectivity
    let version = client.get_version().await?;
    println!("  RPC version: {}", version.solana_core);

    // Fee payer balance
    let balance_lamports = client.get_balance(&fee_payer.pubkey()).await?;
    let sol = balance_lamports as f64 / 1_000_000_000_f64;
    println!("  Fee payer: {}", fee_payer.pubkey());
    println!("  Fee payer balance: {} lamports (~{:.6} SOL)", balance_lamports, sol);
    if balance_lamports < 10_000_000 {
        eprintln!("  Warning: fee payer balance looks low; airdrop before minting.");
    }

    // Mint account: exists, owned by Token-2022, authority matches
    let mint_account = client
        .get_account(&config.mint)
        .await
        .map_err(|e| anyhow::anyhow!("Mint account not found on cluster: {} ({})", config.mint, e))?;
    if mint_account.owner != token_program_id() {
        return Err(anyhow::anyhow!(
            "Mint {} is owned by {}, expected the Token-2022 program {}",
            config.mint,
            mint_account.owner,
            token_program_id()
        ));
    }
    let mint = StateWithExtensions::<Mint>::unpack(&mint_account.data)
        .map_err(|e| anyhow::anyhow!("Mint account data is not a Token-2022 mint: {}", e))?;
    println!("  Mint decimals: {}", mint.base.decimals);
    println!("  Mint supply: {}", mint.base.supply);

    let on_chain_authority: Option<Pubkey> = mint.base.mint_authority.into();
    println!("  Mint authority: {}", mint_authority.pubkey());
    match on_chain_authority {
        Some(a) if a == mint_authority.pubkey() => println!("  Mint authority matches on-chain mint."),
        Some(a) => eprintln!("  Warning: on-chain mint authority is {}; /mint will fail.", a),
        None => eprintln!("  Warning: mint has no authority (fixed supply); /mint will fail."),
    }

    match sender {
        Some(k) => println!("  Server sender: {}", k.pubkey()),
        None => println!("  Server sender: not configured ({})", config.sender_keypair),
    }

    println!("> Preflight OK.");
    Ok(())
}
