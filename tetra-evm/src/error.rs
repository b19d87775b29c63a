//! Error types for EVM wallet operations.

use std::fmt;

/// Errors that can occur during EVM key derivation.
#[derive(Debug)]
pub enum Error {
    /// BIP-32 derivation failed.
    Derivation(String),
    /// Candidate string is not valid hex.
    InvalidHex,
    /// Bytes do not form a valid secp256k1 private key.
    InvalidPrivateKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
            Self::InvalidHex => write!(f, "invalid hex encoding"),
            Self::InvalidPrivateKey => write!(f, "invalid private key"),
        }
    }
}

impl std::error::Error for Error {}
