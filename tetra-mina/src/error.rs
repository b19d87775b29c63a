//! Error types for Mina wallet operations.

use std::fmt;

/// Errors that can occur during Mina key derivation.
#[derive(Debug)]
pub enum Error {
    /// BIP-32 derivation error.
    Bip32(bip32::Error),
    /// The derived node yielded no usable private scalar.
    NoPrivateKey,
    /// Keypair construction from the derived scalar failed.
    Keypair(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bip32(e) => write!(f, "BIP32 derivation error: {e}"),
            Self::NoPrivateKey => write!(f, "derived node has no private key"),
            Self::Keypair(msg) => write!(f, "keypair error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bip32(e) => Some(e),
            Self::NoPrivateKey | Self::Keypair(_) => None,
        }
    }
}

impl From<bip32::Error> for Error {
    fn from(err: bip32::Error) -> Self {
        Self::Bip32(err)
    }
}
