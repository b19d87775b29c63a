//! Bitcoin wallet derivation for tetra.
//!
//! Derives native-segwit (BIP-84, P2WPKH) addresses from a unified
//! [`tetra_core::Wallet`] along `m/84'/0'/0'/0/{index}`, yielding bech32
//! `bc1q...` addresses on mainnet. The deriver intentionally surfaces no
//! raw private key: Bitcoin keys are re-derived from the mnemonic when
//! signing is needed.
//!
//! # Usage
//!
//! ```
//! use tetra_core::Wallet;
//! use tetra_btc::{Deriver, Network};
//!
//! let wallet = Wallet::from_phrase(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//!
//! let account = Deriver::new(&wallet, Network::Mainnet).unwrap().derive(0).unwrap();
//! assert!(account.address.starts_with("bc1q"));
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod deriver;
mod error;
mod network;

pub use deriver::{DerivedAccount, Deriver};
pub use error::Error;
pub use network::Network;
