//! Ethereum-style account derivation from a unified wallet.

use alloy_primitives::Address;
use bip32::{DerivationPath, XPrv};
use k256::ecdsa::SigningKey;
use tetra_core::Wallet;
use zeroize::Zeroizing;

use crate::Error;

/// EVM account deriver over a unified wallet seed.
///
/// Follows the standard BIP-44 path used by MetaMask and Trezor:
/// `m/44'/60'/0'/0/{index}`; only the final address index varies with the
/// account index.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

/// A derived EVM account with associated keys.
#[derive(Debug, Clone)]
pub struct DerivedAccount {
    /// Derivation path used (e.g. `m/44'/60'/0'/0/0`).
    pub path: String,
    /// Private key in hex format without 0x prefix (zeroized on drop).
    pub private_key_hex: Zeroizing<String>,
    /// Public key in uncompressed hex format.
    pub public_key_hex: String,
    /// Checksummed address (EIP-55).
    pub address: String,
}

impl<'a> Deriver<'a> {
    /// Create a new EVM deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the account at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Derivation`] if BIP-32 derivation fails. This does
    /// not happen for seeds produced by [`tetra_core::Wallet`]; it guards
    /// against library invariant violations.
    pub fn derive(&self, index: u32) -> Result<DerivedAccount, Error> {
        self.derive_at_path(&format!("m/44'/60'/0'/0/{index}"))
    }

    /// Derive an account at a custom derivation path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Derivation`] if the path is malformed or
    /// derivation fails.
    pub fn derive_at_path(&self, path: &str) -> Result<DerivedAccount, Error> {
        let derivation_path: DerivationPath = path
            .parse()
            .map_err(|e| Error::Derivation(format!("invalid derivation path: {e}")))?;

        let derived = XPrv::derive_from_path(self.wallet.seed(), &derivation_path)
            .map_err(|e| Error::Derivation(format!("key derivation failed: {e}")))?;
        let private_key: SigningKey = derived.private_key().clone();

        let public_key = private_key.verifying_key().to_encoded_point(false);
        let address = address_from_uncompressed(public_key.as_bytes());

        Ok(DerivedAccount {
            path: path.to_string(),
            private_key_hex: Zeroizing::new(hex::encode(private_key.to_bytes())),
            public_key_hex: hex::encode(public_key.as_bytes()),
            address: address.to_checksum(None),
        })
    }

    /// Derive a run of consecutive accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if any single derivation fails.
    pub fn derive_many(&self, start_index: u32, count: u32) -> Result<Vec<DerivedAccount>, Error> {
        (start_index..start_index + count)
            .map(|index| self.derive(index))
            .collect()
    }
}

/// Ethereum address from a 65-byte uncompressed SEC1 public key.
///
/// The address is the low 20 bytes of keccak-256 over the key material
/// after the 0x04 tag byte.
pub(crate) fn address_from_uncompressed(sec1_bytes: &[u8]) -> Address {
    Address::from_raw_public_key(&sec1_bytes[1..])
}
