//! Tetra - multi-chain wallet provisioning CLI.
//!
//! Generate or import a mnemonic and derive wallet records for every
//! supported network (EVM, Solana, Bitcoin, Mina) in one shot.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::New(cmd) => cmd.execute()?,
        Commands::Validate(cmd) => cmd.execute()?,
        Commands::Classify(cmd) => cmd.execute()?,
        Commands::Provision(cmd) => cmd.execute()?,
    }
    Ok(())
}
