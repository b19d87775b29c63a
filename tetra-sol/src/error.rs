//! Error types for Solana wallet operations.

use std::fmt;

/// Errors that can occur during Solana key derivation.
#[derive(Debug)]
pub enum Error {
    /// Key derivation failed.
    Derivation(String),
    /// HMAC could not be keyed from the supplied material.
    InvalidKeyMaterial,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
            Self::InvalidKeyMaterial => write!(f, "invalid key material"),
        }
    }
}

impl std::error::Error for Error {}
