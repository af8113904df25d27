//! Prompt fingerprints for change detection and log correlation.

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint (lowercase hex) of an assembled prompt.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest
        .iter()
        .fold(String::with_capacity(digest.len() * 2), |mut hex, byte| {
            let _ = write!(hex, "{:02x}", byte);
            hex
        })
}

/// First twelve hex characters of the fingerprint, for log lines.
pub fn short_hash(prompt: &str) -> String {
    let mut hash = hash_prompt(prompt);
    hash.truncate(12);
    hash
}

#[cfg(test)]
mod tests {
    use super::{hash_prompt, short_hash};

    #[test]
    fn test_hash_prompt_stable() {
        let first = hash_prompt("You are a scheduling assistant.");
        let second = hash_prompt("You are a scheduling assistant.");
        let different = hash_prompt("You are a support assistant.");

        assert_eq!(first, second);
        assert_ne!(first, different);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_prompt(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(short_hash(""), "e3b0c44298fc");
    }
}
