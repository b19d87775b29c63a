//! Bitcoin address derivation from a unified wallet.

use bitcoin::bip32::{DerivationPath, Xpriv};
use bitcoin::key::CompressedPublicKey;
use bitcoin::secp256k1::{PublicKey, Secp256k1};
use bitcoin::Address;
use core::marker::PhantomData;
use tetra_core::Wallet;

use crate::{Error, Network};

/// Bitcoin address deriver over a unified wallet seed.
///
/// Follows BIP-84 (native segwit): `m/84'/{coin}'/0'/0/{index}`, coin type
/// 0 on mainnet and 1 on testnet. Only public material leaves the deriver;
/// signing keys are re-derived from the mnemonic when actually needed.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Master extended private key.
    master_key: Xpriv,
    /// Network.
    network: Network,
    /// Reference to the wallet (for lifetime tracking).
    _wallet: PhantomData<&'a Wallet>,
}

/// A derived Bitcoin address.
#[derive(Debug, Clone)]
pub struct DerivedAccount {
    /// Derivation path used (e.g. `m/84'/0'/0'/0/0`).
    pub path: String,
    /// Compressed public key in hex format.
    pub public_key_hex: String,
    /// Bech32 P2WPKH address.
    pub address: String,
}

impl<'a> Deriver<'a> {
    /// Create a new Bitcoin deriver from a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if master key derivation fails.
    pub fn new(wallet: &'a Wallet, network: Network) -> Result<Self, Error> {
        let master_key = Xpriv::new_master(network.to_bitcoin_network(), wallet.seed())?;

        Ok(Self {
            master_key,
            network,
            _wallet: PhantomData,
        })
    }

    /// Derive the P2WPKH address at the given index.
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails.
    pub fn derive(&self, index: u32) -> Result<DerivedAccount, Error> {
        let path = format!("m/84'/{}'/0'/0/{index}", self.network.coin_type());
        self.derive_at_path(&path)
    }

    /// Derive an address at a custom derivation path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is malformed or derivation fails.
    pub fn derive_at_path(&self, path: &str) -> Result<DerivedAccount, Error> {
        let derivation_path: DerivationPath = path
            .parse()
            .map_err(|_| Error::InvalidDerivationPath(path.to_string()))?;

        let secp = Secp256k1::new();
        let derived = self.master_key.derive_priv(&secp, &derivation_path)?;
        let public_key = CompressedPublicKey(PublicKey::from_secret_key(&secp, &derived.private_key));

        let address = Address::p2wpkh(&public_key, self.network.to_bitcoin_network());

        Ok(DerivedAccount {
            path: path.to_string(),
            public_key_hex: public_key.to_string(),
            address: address.to_string(),
        })
    }

    /// Derive a run of consecutive addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if any single derivation fails.
    pub fn derive_many(&self, start_index: u32, count: u32) -> Result<Vec<DerivedAccount>, Error> {
        (start_index..start_index + count)
            .map(|index| self.derive(index))
            .collect()
    }

    /// The network this deriver targets.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }
}
