//! Import-flow classification.
//!
//! The import screen accepts one text field: either a mnemonic phrase or
//! a raw EVM-style private key. [`classify`] tells the caller which flow
//! to run before anything touches a deriver.

use crate::error::Error;

/// What a user-supplied import candidate turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// A valid BIP-39 mnemonic phrase.
    Mnemonic,
    /// A valid raw EVM-style private key.
    PrivateKey,
}

/// Classify a user-supplied import candidate.
///
/// Whitespace is trimmed before either check runs. Mnemonic validation
/// wins ties by running first, though no string passes both.
///
/// # Errors
///
/// Returns [`Error::Phrase`] when the candidate is neither a valid
/// mnemonic nor a valid private key.
pub fn classify(candidate: &str) -> Result<ImportKind, Error> {
    let trimmed = candidate.trim();

    match tetra_core::Wallet::from_phrase(trimmed, None) {
        Ok(_) => Ok(ImportKind::Mnemonic),
        Err(_) if tetra_evm::validate_private_key(trimmed) => Ok(ImportKind::PrivateKey),
        // Surface the mnemonic parse failure; it is the more common intent.
        Err(phrase_err) => Err(Error::Phrase(phrase_err)),
    }
}
