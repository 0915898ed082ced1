//! The token service.
//!
//! Holds the process-lifetime keypairs (fee payer, mint authority and the
//! optional server sender) and turns each HTTP operation into one short
//! sequence of chain calls:
//! 1.  Balance lookups against the owner's associated token account.
//! 2.  Server-signed transactions (ATA creation, minting, server transfers).
//! 3.  Unsigned transfer transactions for a browser wallet to sign.

use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::sync::Arc;

use crate::app::chain::TokenChain;
use crate::domain::token::{
    associated_token_address, build_transfer_transaction, create_ata_idempotent_instruction,
    encode_transaction, mint_to_instruction, transfer_instructions,
};
use crate::error::ApiError;

/// Public keys the service operates with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    pub mint: Pubkey,
    pub fee_payer: Pubkey,
    pub mint_authority: Pubkey,
    pub sender: Option<Pubkey>,
}

pub struct TokenService {
    chain: Arc<dyn TokenChain>,
    mint: Pubkey,
    fee_payer: Keypair,
    mint_authority: Keypair,
    sender: Option<Keypair>,
}

impl TokenService {
    pub fn new(
        chain: Arc<dyn TokenChain>,
        mint: Pubkey,
        fee_payer: Keypair,
        mint_authority: Keypair,
        sender: Option<Keypair>,
    ) -> Self {
        Self {
            chain,
            mint,
            fee_payer,
            mint_authority,
            sender,
        }
    }

    pub fn identity(&self) -> ServiceIdentity {
        ServiceIdentity {
            mint: self.mint,
            fee_payer: self.fee_payer.pubkey(),
            mint_authority: self.mint_authority.pubkey(),
            sender: self.sender.as_ref().map(|k| k.pubkey()),
        }
    }

    /// Returns the owner's ATA and its balance; an absent account holds `0`.
    pub async fn balance(&self, owner: &Pubkey) -> Result<(Pubkey, u64), ApiError> {
        let ata = associated_token_address(owner, &self.mint);
        let amount = self.chain.token_balance(&ata).await?.unwrap_or(0);
        Ok((ata, amount))
    }

    /// Creates the owner's ATA if missing, paid for by the fee payer.
    pub async fn create_ata(&self, owner: &Pubkey) -> Result<(Pubkey, Signature), ApiError> {
        let ata = associated_token_address(owner, &self.mint);
        let instruction =
            create_ata_idempotent_instruction(&self.fee_payer.pubkey(), owner, &self.mint);
        let signature = self.sign_and_send(&[instruction], &[&self.fee_payer]).await?;
        tracing::info!(%owner, %ata, %signature, "associated token account ensured");
        Ok((ata, signature))
    }

    /// Mints `amount` to the recipient, creating its ATA first when needed.
    pub async fn mint_to(
        &self,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<(Pubkey, Signature), ApiError> {
        let ata = associated_token_address(recipient, &self.mint);
        let instructions = vec![
            create_ata_idempotent_instruction(&self.fee_payer.pubkey(), recipient, &self.mint),
            mint_to_instruction(&self.mint, &ata, &self.mint_authority.pubkey(), amount)?,
        ];
        let signature = self
            .sign_and_send(&instructions, &[&self.fee_payer, &self.mint_authority])
            .await?;
        tracing::info!(%recipient, %ata, amount, %signature, "minted tokens");
        Ok((ata, signature))
    }

    /// Builds the unsigned transfer for the sender's wallet and returns it
    /// base64-encoded.
    pub async fn prepare_transfer(
        &self,
        sender: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<String, ApiError> {
        let (_, balance) = self.balance(sender).await?;
        if balance < amount {
            return Err(ApiError::InsufficientBalance);
        }

        let blockhash = self.chain.latest_blockhash().await?;
        let transaction = build_transfer_transaction(sender, recipient, &self.mint, amount, blockhash)?;
        tracing::debug!(%sender, %recipient, amount, %blockhash, "prepared unsigned transfer");
        encode_transaction(&transaction)
    }

    /// Transfers from the configured server sender; fees are paid by the fee payer.
    pub async fn server_transfer(
        &self,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<(Pubkey, Signature), ApiError> {
        let sender = self.sender.as_ref().ok_or(ApiError::SenderNotConfigured)?;
        let (_, balance) = self.balance(&sender.pubkey()).await?;
        if balance < amount {
            return Err(ApiError::InsufficientBalance);
        }

        let instructions = transfer_instructions(
            &self.fee_payer.pubkey(),
            &sender.pubkey(),
            recipient,
            &self.mint,
            amount,
        )?;
        let signature = self
            .sign_and_send(&instructions, &[&self.fee_payer, sender])
            .await?;
        let ata = associated_token_address(recipient, &self.mint);
        tracing::info!(sender = %sender.pubkey(), %recipient, amount, %signature, "server transfer sent");
        Ok((ata, signature))
    }

    async fn sign_and_send(
        &self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Signature, ApiError> {
        let mut transaction = Transaction::new_with_payer(instructions, Some(&self.fee_payer.pubkey()));
        let blockhash = self.chain.latest_blockhash().await?;
        transaction.try_sign(signers, blockhash)?;
        self.chain.send_and_confirm(&transaction).await
    }
}
