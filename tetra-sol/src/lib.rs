//! Solana wallet derivation for tetra.
//!
//! Derives Solana accounts from a unified [`tetra_core::Wallet`] along the
//! hardened-only path `m/44'/501'/{index}'/0'` (SLIP-0010 over ed25519;
//! the curve admits no public-parent derivation, so every segment is
//! hardened).
//!
//! # Usage
//!
//! ```
//! use tetra_core::Wallet;
//! use tetra_sol::Deriver;
//!
//! let wallet = Wallet::from_phrase(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//!
//! let account = Deriver::new(&wallet).derive(0).unwrap();
//! assert_eq!(account.address, account.public_key);
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod deriver;
mod error;
mod slip10;

pub use deriver::{DerivedAccount, Deriver};
pub use error::Error;
