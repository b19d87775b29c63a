//! Mina wallet derivation for tetra.
//!
//! Derives Mina accounts from a unified [`tetra_core::Wallet`] along
//! `m/44'/12586'/{index}'/0/0`. Mina reuses BIP-32 over secp256k1 for the
//! key-material walk but signs on the Pallas curve, so the derived scalar
//! is masked down to the Pallas field (top two bits cleared), reversed to
//! little-endian, version-tagged and base58check-encoded into the `EK…`
//! private key format wallets exchange. The public key and `B62q…` address
//! come from the Mina signer.
//!
//! # Usage
//!
//! ```no_run
//! use tetra_core::Wallet;
//! use tetra_mina::{Deriver, Network};
//!
//! let wallet = Wallet::from_phrase(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//!
//! let account = Deriver::new(&wallet, Network::Mainnet).derive(0).unwrap();
//! assert!(account.address.starts_with("B62q"));
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod deriver;
mod error;
mod network;

pub use deriver::{DerivedAccount, Deriver};
pub use error::Error;
pub use network::Network;
