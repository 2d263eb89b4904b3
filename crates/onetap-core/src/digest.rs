//! Message digests over the UTF-8 bytes of the input.

use serde::Serialize;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum HashAlgorithm {
    #[serde(rename = "SHA-1")]
    #[strum(to_string = "SHA-1", serialize = "sha1")]
    Sha1,
    #[serde(rename = "SHA-256")]
    #[strum(to_string = "SHA-256", serialize = "sha256")]
    Sha256,
    #[serde(rename = "SHA-512")]
    #[strum(to_string = "SHA-512", serialize = "sha512")]
    Sha512,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    pub hex_digest: String,
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.algorithm, self.hex_digest)
    }
}

/// Digest the input and render the result as lowercase hex.
pub fn hash(algorithm: HashAlgorithm, input: &str) -> HashResult {
    let hex_digest = match algorithm {
        HashAlgorithm::Sha1 => hex::encode(Sha1::digest(input.as_bytes())),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(input.as_bytes())),
    };
    HashResult {
        algorithm,
        hex_digest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input_is_the_known_constant() {
        let result = hash(HashAlgorithm::Sha256, "");
        assert_eq!(
            result.hex_digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha1_of_known_vector() {
        assert_eq!(
            hash(HashAlgorithm::Sha1, "abc").hex_digest,
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn sha512_digest_is_128_hex_chars() {
        let result = hash(HashAlgorithm::Sha512, "abc");
        assert_eq!(result.hex_digest.len(), 128);
        assert!(result.hex_digest.starts_with("ddaf35a193617aba"));
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let result = hash(HashAlgorithm::Sha256, "OneTap");
        assert_eq!(result.hex_digest.len(), 64);
        assert!(result.hex_digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!result.hex_digest.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn display_labels_the_algorithm() {
        let result = hash(HashAlgorithm::Sha256, "");
        assert!(result.to_string().starts_with("SHA-256: "));
    }

    #[test]
    fn same_input_same_digest() {
        assert_eq!(
            hash(HashAlgorithm::Sha512, "stable"),
            hash(HashAlgorithm::Sha512, "stable")
        );
    }

    #[test]
    fn algorithm_parses_from_short_and_display_names() {
        assert_eq!("sha256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("SHA-512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }
}
