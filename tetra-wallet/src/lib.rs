//! Multi-chain wallet provisioning for tetra.
//!
//! One mnemonic, four networks. [`provision`] validates a phrase, fans the
//! four per-network derivations out onto scoped threads and returns one
//! [`WalletRecord`] per network in fixed order (EVM, Solana, Bitcoin,
//! Mina). Provisioning is all-or-nothing: a wallet with only three of
//! four networks provisioned is not a wallet.
//!
//! The crate also owns the import classifier ([`classify`]) and the
//! [`handoff`] traits over which callers push secrets into a secure store
//! and public records into application state. Derivation itself is pure:
//! no I/O, no globals, no storage.
//!
//! # Example
//!
//! ```
//! use tetra_wallet::{provision, Network};
//!
//! let records = provision(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     0,
//! ).unwrap();
//!
//! assert_eq!(records[0].network, Network::Evm);
//! assert!(records[0].address.starts_with("0x"));
//! assert_eq!(records.iter().map(|r| r.balance).sum::<f64>(), 0.0);
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod error;
pub mod handoff;
mod import;
mod network;
mod provision;
mod record;

pub use error::Error;
pub use import::{classify, ImportKind};
pub use network::{NativeCurrency, Network, SecretPolicy};
pub use provision::{provision, provision_with, NETWORK_COUNT};
pub use record::{PublicWalletRecord, WalletRecord};

pub use tetra_core::Wallet;
pub use tetra_mina::Network as MinaNetwork;
