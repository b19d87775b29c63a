//! Per-network wallet records.

use serde::Serialize;
use zeroize::Zeroizing;

use crate::network::{NativeCurrency, Network};

/// The derived output bundle for one network.
///
/// `balance` starts at zero; an external balance-fetch collaborator
/// populates it later. `secret_key` is present only for networks whose
/// [`SecretPolicy`](crate::SecretPolicy) is `Exposed` and is zeroized on
/// drop. Records are safe to regenerate: the mnemonic is the root of
/// trust, these are derived artifacts.
#[derive(Debug, Clone)]
pub struct WalletRecord {
    /// Which network this record belongs to.
    pub network: Network,
    /// Network-native address string.
    pub address: String,
    /// Network-native public key encoding. For EVM and Bitcoin this
    /// equals the address; those chains never publish raw key material.
    pub public_key: String,
    /// Network-native secret key string, per the network's secret policy.
    pub secret_key: Option<Zeroizing<String>>,
    /// Balance in main units; populated externally.
    pub balance: f64,
    /// Static currency metadata.
    pub native_currency: NativeCurrency,
}

impl WalletRecord {
    /// The secret-free projection persisted to the application state
    /// store.
    #[must_use]
    pub fn public(&self) -> PublicWalletRecord {
        PublicWalletRecord {
            network: self.network,
            address: self.address.clone(),
            public_key: self.public_key.clone(),
            balance: self.balance,
            native_currency: self.native_currency,
        }
    }
}

/// Public view of a [`WalletRecord`].
///
/// Secrets are structurally absent, so handing this type to a
/// general-purpose store cannot leak key material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicWalletRecord {
    /// Which network this record belongs to.
    pub network: Network,
    /// Network-native address string.
    pub address: String,
    /// Network-native public key encoding.
    pub public_key: String,
    /// Balance in main units.
    pub balance: f64,
    /// Static currency metadata.
    pub native_currency: NativeCurrency,
}
