//! Mina account derivation from a unified wallet.

use bip32::{DerivationPath, XPrv};
use mina_signer::Keypair;
use tetra_core::Wallet;
use zeroize::Zeroizing;

use crate::{Error, Network};

/// Version tag prefixed to the little-endian scalar before base58check
/// encoding; yields the `EK…` private key format.
const PRIVATE_KEY_VERSION: [u8; 2] = [0x5a, 0x01];

/// Mask clearing the top two bits of the most-significant scalar byte so
/// the derived value fits the Pallas scalar field.
const SCALAR_MASK: u8 = 0x3f;

/// Mina account deriver over a unified wallet seed.
///
/// Uses `m/44'/12586'/{index}'/0/0`: the account index sits at the third
/// (hardened) segment, the final two segments are fixed and non-hardened.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
    /// Network selecting the signature domain.
    network: Network,
}

/// A derived Mina account with associated keys.
#[derive(Debug, Clone)]
pub struct DerivedAccount {
    /// Derivation path used (e.g. `m/44'/12586'/0'/0/0`).
    pub path: String,
    /// Base58check private key (`EK…`, zeroized on drop).
    pub private_key: Zeroizing<String>,
    /// Public key in Mina address form (`B62q…`).
    pub public_key: String,
    /// Mina address, identical to the public key.
    pub address: String,
}

impl<'a> Deriver<'a> {
    /// Create a new Mina deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet, network: Network) -> Self {
        Self { wallet, network }
    }

    /// Derive the account at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPrivateKey`] if the derived node yields no
    /// usable scalar (never observed for seed-derived nodes) and
    /// [`Error::Keypair`] if the masked scalar is rejected by the signer.
    pub fn derive(&self, index: u32) -> Result<DerivedAccount, Error> {
        let path = format!("m/44'/12586'/{index}'/0/0");
        let scalar = derive_scalar(self.wallet.seed(), &path)?;

        // The signer consumes the scalar as big-endian hex.
        let scalar_hex = Zeroizing::new(hex::encode(&*scalar));
        let keypair = Keypair::from_hex(&scalar_hex).map_err(|e| Error::Keypair(e.to_string()))?;
        let public_key = keypair.get_address();

        Ok(DerivedAccount {
            path,
            private_key: encode_private_key(&scalar),
            address: public_key.clone(),
            public_key,
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

    /// The network this deriver signs for.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }
}

/// Walk the BIP-32 path and mask the derived scalar into the Pallas field.
///
/// Returned bytes are big-endian.
fn derive_scalar(seed: &[u8; 64], path: &str) -> Result<Zeroizing<[u8; 32]>, Error> {
    let derivation_path: DerivationPath = path.parse().map_err(Error::Bip32)?;
    let node = XPrv::derive_from_path(seed, &derivation_path)?;

    let mut scalar = Zeroizing::new(<[u8; 32]>::from(node.private_key().to_bytes()));
    scalar[0] &= SCALAR_MASK;

    if scalar.iter().all(|&b| b == 0) {
        return Err(Error::NoPrivateKey);
    }
    Ok(scalar)
}

/// Encode a big-endian scalar as a Mina `EK…` private key string.
///
/// Layout: base58check over version tag ‖ little-endian scalar.
fn encode_private_key(scalar_be: &[u8; 32]) -> Zeroizing<String> {
    let mut payload = Zeroizing::new(Vec::with_capacity(2 + scalar_be.len()));
    payload.extend_from_slice(&PRIVATE_KEY_VERSION);
    payload.extend(scalar_be.iter().rev());
    Zeroizing::new(bs58::encode(&*payload).with_check().into_string())
}
