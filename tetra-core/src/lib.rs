//! Core wallet types for the tetra multi-chain wallet.
//!
//! This crate provides the unified [`Wallet`] type that holds a BIP-39
//! mnemonic and the seed derived from it. Every network-specific deriver
//! crate (`tetra-evm`, `tetra-sol`, `tetra-btc`, `tetra-mina`) consumes the
//! same seed, so one mnemonic provisions all supported chains.
//!
//! # Example
//!
//! ```
//! use tetra_core::Wallet;
//!
//! // Generate a new 12-word wallet
//! let wallet = Wallet::generate(12, None)?;
//!
//! // Or import an existing phrase
//! let wallet = Wallet::from_phrase(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! )?;
//!
//! // The same seed feeds every per-network deriver
//! let seed = wallet.seed();
//! # Ok::<(), tetra_core::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod error;
pub mod mnemonic;
mod wallet;

pub use error::{Error, Result};
pub use wallet::{validate, Wallet};
