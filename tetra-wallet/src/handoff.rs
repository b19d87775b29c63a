//! The secret handoff contract.
//!
//! Derivation is pure; persistence is the caller's problem. These traits
//! are the boundary over which a provisioned wallet is split: the
//! mnemonic and per-network secret keys go to a [`SecretStore`] (a
//! keychain-equivalent the platform provides), the public projections go
//! to a [`StateStore`] (the application state container). The core never
//! writes secret material to the state store; the type split enforces
//! it, since [`PublicWalletRecord`] cannot carry a secret.

use tetra_core::Wallet;

use crate::network::Network;
use crate::record::{PublicWalletRecord, WalletRecord};

/// Sink for secret material. Implemented by the platform keychain layer.
///
/// Implementations are expected to encrypt at rest and to serialize
/// writes per wallet profile; neither concern lives in this crate.
pub trait SecretStore {
    /// Error type of the backing store.
    type Error;

    /// Store the mnemonic phrase, the root of trust.
    fn store_phrase(&mut self, phrase: &str) -> Result<(), Self::Error>;

    /// Store one network's derived secret key.
    fn store_secret_key(&mut self, network: Network, secret_key: &str) -> Result<(), Self::Error>;

    /// Purge everything for this wallet. Called on wallet reset, after
    /// which derived records must be discarded too.
    fn purge(&mut self) -> Result<(), Self::Error>;
}

/// Sink for public wallet state. Implemented by the application store.
pub trait StateStore {
    /// Error type of the backing store.
    type Error;

    /// Persist one network's public record.
    fn store_record(&mut self, record: PublicWalletRecord) -> Result<(), Self::Error>;
}

/// Split a provisioned wallet across the two stores.
///
/// Secrets (the phrase plus any per-network secret keys) land in
/// `secrets`; the public projections land in `state`. Record order is
/// preserved.
///
/// # Errors
///
/// Propagates the first store error. Earlier writes are not rolled back;
/// transactionality belongs to the stores.
pub fn handoff<S, P>(
    wallet: &Wallet,
    records: &[WalletRecord],
    secrets: &mut S,
    state: &mut P,
) -> Result<(), HandoffError<S::Error, P::Error>>
where
    S: SecretStore,
    P: StateStore,
{
    secrets
        .store_phrase(&wallet.phrase())
        .map_err(HandoffError::Secret)?;

    for record in records {
        if let Some(secret_key) = &record.secret_key {
            secrets
                .store_secret_key(record.network, secret_key)
                .map_err(HandoffError::Secret)?;
        }
        state.store_record(record.public()).map_err(HandoffError::State)?;
    }
    Ok(())
}

/// Error from either side of the handoff.
#[derive(Debug)]
pub enum HandoffError<S, P> {
    /// The secret store failed.
    Secret(S),
    /// The state store failed.
    State(P),
}

impl<S: std::fmt::Display, P: std::fmt::Display> std::fmt::Display for HandoffError<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secret(e) => write!(f, "secret store error: {e}"),
            Self::State(e) => write!(f, "state store error: {e}"),
        }
    }
}

impl<S, P> std::error::Error for HandoffError<S, P>
where
    S: std::fmt::Display + std::fmt::Debug,
    P: std::fmt::Display + std::fmt::Debug,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::provision_with;
    use crate::MinaNetwork;
    use std::convert::Infallible;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[derive(Default)]
    struct MemorySecrets {
        phrase: Option<String>,
        keys: Vec<(Network, String)>,
    }

    impl SecretStore for MemorySecrets {
        type Error = Infallible;

        fn store_phrase(&mut self, phrase: &str) -> Result<(), Infallible> {
            self.phrase = Some(phrase.to_string());
            Ok(())
        }

        fn store_secret_key(&mut self, network: Network, secret_key: &str) -> Result<(), Infallible> {
            self.keys.push((network, secret_key.to_string()));
            Ok(())
        }

        fn purge(&mut self) -> Result<(), Infallible> {
            self.phrase = None;
            self.keys.clear();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryState {
        records: Vec<PublicWalletRecord>,
    }

    impl StateStore for MemoryState {
        type Error = Infallible;

        fn store_record(&mut self, record: PublicWalletRecord) -> Result<(), Infallible> {
            self.records.push(record);
            Ok(())
        }
    }

    #[test]
    fn secrets_and_state_split_cleanly() {
        let wallet = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        let records = provision_with(&wallet, 0, MinaNetwork::Mainnet).unwrap();

        let mut secrets = MemorySecrets::default();
        let mut state = MemoryState::default();
        handoff(&wallet, &records, &mut secrets, &mut state).unwrap();

        assert_eq!(secrets.phrase.as_deref(), Some(TEST_MNEMONIC));

        // Only the Exposed-policy networks hand over a secret key.
        let networks: Vec<Network> = secrets.keys.iter().map(|(n, _)| *n).collect();
        assert_eq!(networks, [Network::Solana, Network::Mina]);

        // The state store saw all four records, none carrying secrets.
        assert_eq!(state.records.len(), 4);
        for (public, full) in state.records.iter().zip(records.iter()) {
            assert_eq!(public.network, full.network);
            assert_eq!(public.address, full.address);
        }
    }

    #[test]
    fn purge_clears_the_secret_store() {
        let wallet = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        let records = provision_with(&wallet, 0, MinaNetwork::Mainnet).unwrap();

        let mut secrets = MemorySecrets::default();
        let mut state = MemoryState::default();
        handoff(&wallet, &records, &mut secrets, &mut state).unwrap();

        secrets.purge().unwrap();
        assert!(secrets.phrase.is_none());
        assert!(secrets.keys.is_empty());
    }
}
