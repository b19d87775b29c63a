//! EVM wallet derivation for tetra.
//!
//! Derives Ethereum-style accounts from a unified [`tetra_core::Wallet`]
//! along the standard BIP-44 path `m/44'/60'/0'/0/{index}` and validates
//! raw private keys for the import flow.
//!
//! # Usage
//!
//! ```
//! use tetra_core::Wallet;
//! use tetra_evm::Deriver;
//!
//! let wallet = Wallet::from_phrase(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//!
//! let account = Deriver::new(&wallet).derive(0).unwrap();
//! assert!(account.address.starts_with("0x"));
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod deriver;
mod error;
mod private_key;

pub use deriver::{DerivedAccount, Deriver};
pub use error::Error;
pub use private_key::validate_private_key;
