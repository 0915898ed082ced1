//! Keypair loading from Solana CLI JSON files (`[u8; 64]` arrays).

use solana_sdk::signer::keypair::{read_keypair_file, Keypair};
use std::path::Path;

/// Reads a keypair file, expanding a leading `~`. `name` only labels errors.
pub fn load_keypair(path: &str, name: &str) -> anyhow::Result<Keypair> {
    let expanded = shellexpand::tilde(path).to_string();
    read_keypair_file(&expanded)
        .map_err(|e| anyhow::anyhow!("Cannot load {} from {}: {}", name, expanded, e))
}

/// Like [`load_keypair`], but a missing file yields `None`. A file that
/// exists and fails to parse is still an error.
pub fn load_optional_keypair(path: &str, name: &str) -> anyhow::Result<Option<Keypair>> {
    let expanded = shellexpand::tilde(path).to_string();
    if !Path::new(&expanded).exists() {
        return Ok(None);
    }
    load_keypair(&expanded, name).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::{keypair::write_keypair_file, Signer};

    fn temp_path(file: &str) -> String {
        std::env::temp_dir()
            .join(format!("spl-token-demo-{}-{}", std::process::id(), file))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn loads_written_keypair() {
        let path = temp_path("payer.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).unwrap();

        let loaded = load_keypair(&path, "fee payer").unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
        assert_eq!(
            load_optional_keypair(&path, "sender").unwrap().map(|k| k.pubkey()),
            Some(keypair.pubkey())
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_names_the_key() {
        let path = temp_path("missing.json");
        let err = load_keypair(&path, "mint authority").unwrap_err();
        assert!(err.to_string().contains("mint authority"));
        assert!(load_optional_keypair(&path, "sender").unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_an_error_even_when_optional() {
        let path = temp_path("corrupt.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(load_optional_keypair(&path, "sender").is_err());
        std::fs::remove_file(&path).ok();
    }
}
