//! CLI command definitions and handlers.

mod phrase;
mod provision;

use clap::{Parser, Subcommand};
pub use phrase::{ClassifyCommand, NewCommand, ValidateCommand};
pub use provision::ProvisionCommand;

/// Tetra - multi-chain wallet provisioning CLI.
#[derive(Parser)]
#[command(name = "tetra")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new mnemonic phrase.
    New(NewCommand),

    /// Validate a mnemonic phrase.
    Validate(ValidateCommand),

    /// Classify an import candidate (mnemonic or private key).
    Classify(ClassifyCommand),

    /// Derive wallet records for every network from a mnemonic.
    Provision(ProvisionCommand),
}
