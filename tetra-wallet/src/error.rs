//! Error types for wallet provisioning.

use std::fmt;

use crate::network::Network;

/// Errors that can occur while provisioning a wallet.
///
/// Per-network variants wrap the failing deriver's error so callers can
/// tell which network sank the operation; provisioning itself is
/// all-or-nothing.
#[derive(Debug)]
pub enum Error {
    /// The supplied phrase failed mnemonic validation.
    Phrase(tetra_core::Error),
    /// EVM derivation failed.
    Evm(tetra_evm::Error),
    /// Solana derivation failed.
    Solana(tetra_sol::Error),
    /// Bitcoin derivation failed.
    Bitcoin(tetra_btc::Error),
    /// Mina derivation failed.
    Mina(tetra_mina::Error),
}

impl Error {
    /// The network whose derivation failed, if any.
    #[must_use]
    pub const fn network(&self) -> Option<Network> {
        match self {
            Self::Phrase(_) => None,
            Self::Evm(_) => Some(Network::Evm),
            Self::Solana(_) => Some(Network::Solana),
            Self::Bitcoin(_) => Some(Network::Bitcoin),
            Self::Mina(_) => Some(Network::Mina),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phrase(e) => write!(f, "invalid mnemonic phrase: {e}"),
            Self::Evm(e) => write!(f, "EVM derivation failed: {e}"),
            Self::Solana(e) => write!(f, "Solana derivation failed: {e}"),
            Self::Bitcoin(e) => write!(f, "Bitcoin derivation failed: {e}"),
            Self::Mina(e) => write!(f, "Mina derivation failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Phrase(e) => Some(e),
            Self::Evm(e) => Some(e),
            Self::Solana(e) => Some(e),
            Self::Bitcoin(e) => Some(e),
            Self::Mina(e) => Some(e),
        }
    }
}

impl From<tetra_core::Error> for Error {
    fn from(err: tetra_core::Error) -> Self {
        Self::Phrase(err)
    }
}

impl From<tetra_evm::Error> for Error {
    fn from(err: tetra_evm::Error) -> Self {
        Self::Evm(err)
    }
}

impl From<tetra_sol::Error> for Error {
    fn from(err: tetra_sol::Error) -> Self {
        Self::Solana(err)
    }
}

impl From<tetra_btc::Error> for Error {
    fn from(err: tetra_btc::Error) -> Self {
        Self::Bitcoin(err)
    }
}

impl From<tetra_mina::Error> for Error {
    fn from(err: tetra_mina::Error) -> Self {
        Self::Mina(err)
    }
}
