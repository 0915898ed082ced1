//! Token-2022 instruction and transaction construction.
//!
//! Everything here is pure: no RPC, no keypairs. The service layer feeds in
//! the blockhash and signs (or leaves unsigned) what these helpers build.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use serde_json::Value as JsonValue;
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};
use spl_token_2022::{extension::StateWithExtensions, state::Account as TokenAccount};
use std::str::FromStr;

use crate::error::ApiError;

/// Program that owns every token account this service touches.
pub fn token_program_id() -> Pubkey {
    spl_token_2022::id()
}

pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &token_program_id())
}

/// Creates `owner`'s ATA for `mint` if it does not exist yet; a no-op otherwise.
pub fn create_ata_idempotent_instruction(funder: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    create_associated_token_account_idempotent(funder, owner, mint, &token_program_id())
}

pub fn mint_to_instruction(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, ApiError> {
    Ok(spl_token_2022::instruction::mint_to(
        &token_program_id(),
        mint,
        destination,
        authority,
        &[],
        amount,
    )?)
}

// Plain `Transfer` (no decimals check), matching what the web wallet signs.
#[allow(deprecated)]
pub fn transfer_instruction(
    source: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, ApiError> {
    Ok(spl_token_2022::instruction::transfer(
        &token_program_id(),
        source,
        destination,
        owner,
        &[],
        amount,
    )?)
}

/// The two instructions of every transfer, in order: idempotent creation of
/// the recipient ATA (funded by `funder`), then the token transfer out of the
/// sender's ATA.
pub fn transfer_instructions(
    funder: &Pubkey,
    sender: &Pubkey,
    recipient: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>, ApiError> {
    let source = associated_token_address(sender, mint);
    let destination = associated_token_address(recipient, mint);
    Ok(vec![
        create_ata_idempotent_instruction(funder, recipient, mint),
        transfer_instruction(&source, &destination, sender, amount)?,
    ])
}

/// Builds the unsigned v0 transaction handed to a browser wallet.
///
/// The sender pays fees and funds the recipient ATA, so it is the only
/// required signer. Signature slots are zero-filled for the wallet to replace.
pub fn build_transfer_transaction(
    sender: &Pubkey,
    recipient: &Pubkey,
    mint: &Pubkey,
    amount: u64,
    recent_blockhash: Hash,
) -> Result<VersionedTransaction, ApiError> {
    let instructions = transfer_instructions(sender, sender, recipient, mint, amount)?;
    let message = v0::Message::try_compile(sender, &instructions, &[], recent_blockhash)?;
    Ok(unsigned_transaction(VersionedMessage::V0(message)))
}

fn unsigned_transaction(message: VersionedMessage) -> VersionedTransaction {
    let required = message.header().num_required_signatures as usize;
    VersionedTransaction {
        signatures: vec![Signature::default(); required],
        message,
    }
}

pub fn encode_transaction(transaction: &VersionedTransaction) -> Result<String, ApiError> {
    let bytes = bincode::serialize(transaction).map_err(|e| ApiError::Encoding(e.to_string()))?;
    Ok(B64.encode(bytes))
}

pub fn decode_transaction(encoded: &str) -> Result<VersionedTransaction, ApiError> {
    let bytes = B64
        .decode(encoded.trim())
        .map_err(|e| ApiError::Encoding(format!("invalid base64: {}", e)))?;
    bincode::deserialize(&bytes).map_err(|e| ApiError::Encoding(e.to_string()))
}

pub fn parse_pubkey(input: &str) -> Result<Pubkey, ApiError> {
    let input = input.trim();
    Pubkey::from_str(input).map_err(|e| ApiError::InvalidAddress(input.to_string(), e))
}

/// Accepts a non-negative JSON integer or a decimal string (`100` or `"100"`).
pub fn parse_amount(value: &JsonValue) -> Result<u64, ApiError> {
    match value {
        JsonValue::Number(n) => n
            .as_u64()
            .ok_or_else(|| ApiError::InvalidAmount(n.to_string())),
        JsonValue::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| ApiError::InvalidAmount(s.clone())),
        other => Err(ApiError::InvalidAmount(other.to_string())),
    }
}

/// Reads the raw token amount out of a Token-2022 account (extensions allowed).
pub fn unpack_token_amount(data: &[u8]) -> Result<u64, ApiError> {
    let account = StateWithExtensions::<TokenAccount>::unpack(data)?;
    Ok(account.base.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use spl_token_2022::solana_program::program_pack::Pack;
    use spl_token_2022::extension::{
        immutable_owner::ImmutableOwner, BaseStateWithExtensionsMut, ExtensionType,
        StateWithExtensionsMut,
    };
    use spl_token_2022::state::AccountState;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn ata_is_deterministic_per_owner() {
        let mint = key(9);
        let a = associated_token_address(&key(1), &mint);
        assert_eq!(a, associated_token_address(&key(1), &mint));
        assert_ne!(a, associated_token_address(&key(2), &mint));
        assert_eq!(
            a,
            get_associated_token_address_with_program_id(&key(1), &mint, &spl_token_2022::id())
        );
    }

    #[test]
    fn transfer_transaction_has_create_then_transfer() {
        let (sender, recipient, mint) = (key(1), key(2), key(9));
        let blockhash = Hash::new_from_array([7; 32]);
        let tx = build_transfer_transaction(&sender, &recipient, &mint, 42, blockhash).unwrap();

        assert!(matches!(tx.message, VersionedMessage::V0(_)));
        assert_eq!(tx.message.recent_blockhash(), &blockhash);
        assert_eq!(tx.signatures, vec![Signature::default()]);

        let keys = tx.message.static_account_keys();
        assert_eq!(keys[0], sender);

        let ixs = tx.message.instructions();
        assert_eq!(ixs.len(), 2);
        assert_eq!(
            keys[ixs[0].program_id_index as usize],
            spl_associated_token_account::id()
        );
        assert_eq!(ixs[0].data, vec![1]);
        assert_eq!(keys[ixs[1].program_id_index as usize], spl_token_2022::id());
        assert_eq!(ixs[1].data[0], 3);
        assert_eq!(&ixs[1].data[1..9], &42u64.to_le_bytes());

        // transfer accounts: source, destination, owner
        let accounts: Vec<Pubkey> = ixs[1].accounts.iter().map(|i| keys[*i as usize]).collect();
        assert_eq!(
            accounts,
            vec![
                associated_token_address(&sender, &mint),
                associated_token_address(&recipient, &mint),
                sender,
            ]
        );
    }

    #[test]
    fn encoded_transaction_decodes_to_same_message() {
        let tx = build_transfer_transaction(&key(1), &key(2), &key(9), 5, Hash::default()).unwrap();
        let encoded = encode_transaction(&tx).unwrap();
        let decoded = decode_transaction(&encoded).unwrap();
        assert_eq!(decoded, tx);
        assert!(decode_transaction("not base64!").is_err());
    }

    #[test]
    fn amount_accepts_integers_and_decimal_strings() {
        assert_eq!(parse_amount(&json!(100)).unwrap(), 100);
        assert_eq!(parse_amount(&json!(" 250 ")).unwrap(), 250);
        assert!(matches!(parse_amount(&json!(-1)), Err(ApiError::InvalidAmount(_))));
        assert!(matches!(parse_amount(&json!(1.5)), Err(ApiError::InvalidAmount(_))));
        assert!(matches!(parse_amount(&json!("ten")), Err(ApiError::InvalidAmount(_))));
        assert!(matches!(parse_amount(&json!(true)), Err(ApiError::InvalidAmount(_))));
        // present but empty is not zero
        assert!(matches!(parse_amount(&json!("")), Err(ApiError::InvalidAmount(_))));
    }

    #[test]
    fn invalid_pubkey_is_rejected() {
        assert!(matches!(parse_pubkey("nope"), Err(ApiError::InvalidAddress(_, _))));
        assert_eq!(parse_pubkey(&key(3).to_string()).unwrap(), key(3));
    }

    #[test]
    fn unpacks_plain_token_account() {
        let account = TokenAccount {
            mint: key(9),
            owner: key(1),
            amount: 1_234,
            state: AccountState::Initialized,
            ..TokenAccount::default()
        };
        let mut data = vec![0u8; TokenAccount::LEN];
        TokenAccount::pack(account, &mut data).unwrap();
        assert_eq!(unpack_token_amount(&data).unwrap(), 1_234);
        assert!(unpack_token_amount(&[0u8; 10]).is_err());
    }

    #[test]
    fn unpacks_account_with_immutable_owner_extension() {
        // ATAs created under Token-2022 always carry ImmutableOwner.
        let len =
            ExtensionType::try_calculate_account_len::<TokenAccount>(&[ExtensionType::ImmutableOwner])
                .unwrap();
        assert_eq!(len, 170);

        let mut data = vec![0u8; len];
        {
            let mut state = StateWithExtensionsMut::<TokenAccount>::unpack_uninitialized(&mut data).unwrap();
            state.base = TokenAccount {
                mint: key(9),
                owner: key(1),
                amount: 777,
                state: AccountState::Initialized,
                ..TokenAccount::default()
            };
            state.pack_base();
            state.init_account_type().unwrap();
            state.init_extension::<ImmutableOwner>(true).unwrap();
        }

        assert!(TokenAccount::unpack(&data).is_err());
        assert_eq!(unpack_token_amount(&data).unwrap(), 777);
    }
}
