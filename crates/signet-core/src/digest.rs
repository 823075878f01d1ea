//! Digest helpers for signables.
//!
//! All digests are deterministic and explicitly parameterized: callers pick
//! the algorithm, nothing is defaulted. SHA-1 remains available because
//! legacy Authenticode counter-signatures still use it; new signatures
//! should use the SHA-2 family.

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::errors::{SignetError, SignetResult};

/// Digest algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// Parse an algorithm name (e.g. "sha256").
    pub fn parse(s: &str) -> SignetResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha384" | "sha-384" => Ok(Self::Sha384),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(SignetError::invalid_argument(format!(
                "unsupported digest algorithm: {s}"
            ))),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest output length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// Hash raw bytes with the selected algorithm.
pub fn hash_bytes(alg: DigestAlgorithm, bytes: &[u8]) -> Vec<u8> {
    match alg {
        DigestAlgorithm::Sha1 => Sha1::digest(bytes).to_vec(),
        DigestAlgorithm::Sha256 => Sha256::digest(bytes).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(bytes).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(bytes).to_vec(),
    }
}

/// Hash raw bytes and return the lowercase hex string.
pub fn hash_bytes_hex(alg: DigestAlgorithm, bytes: &[u8]) -> String {
    hex::encode(hash_bytes(alg, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for alg in [
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
        ] {
            assert_eq!(DigestAlgorithm::parse(alg.as_str()).unwrap(), alg);
        }
        assert!(DigestAlgorithm::parse("md5").is_err());
    }

    #[test]
    fn digest_lengths_match() {
        for alg in [
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
        ] {
            assert_eq!(hash_bytes(alg, b"abc").len(), alg.digest_len());
        }
    }

    #[test]
    fn sha256_known_answer() {
        assert_eq!(
            hash_bytes_hex(DigestAlgorithm::Sha256, b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
