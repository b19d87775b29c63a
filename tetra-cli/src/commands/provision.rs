//! Wallet provisioning CLI command.

use clap::Args;
use colored::Colorize;
use tetra_core::mnemonic;
use tetra_wallet::{provision_with, MinaNetwork, Wallet, WalletRecord};

/// Derive wallet records for every network.
#[derive(Args)]
pub struct ProvisionCommand {
    /// BIP-39 mnemonic phrase, abbreviated words allowed.
    #[arg(short, long)]
    mnemonic: String,

    /// BIP-39 passphrase (optional extra security).
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Account index to derive.
    #[arg(short, long, default_value = "0")]
    index: u32,

    /// Use the Mina testnet signature domain.
    #[arg(long)]
    testnet: bool,

    /// Print derived secret keys as well as addresses.
    #[arg(long)]
    show_secrets: bool,
}

impl ProvisionCommand {
    /// Execute the provision command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let phrase = mnemonic::expand(&self.mnemonic)?;
        let wallet = Wallet::from_phrase(&phrase, self.passphrase.as_deref())?;
        let mina_network = if self.testnet {
            MinaNetwork::Testnet
        } else {
            MinaNetwork::Mainnet
        };

        let records = provision_with(&wallet, self.index, mina_network)?;
        print_records(&wallet, self.index, &records, self.show_secrets);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_records(wallet: &Wallet, index: u32, records: &[WalletRecord], show_secrets: bool) {
    println!();
    println!("      {}     {}", "Mnemonic".cyan().bold(), wallet.phrase());
    if wallet.has_passphrase() {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
    println!("      {}      {}", "Account".cyan().bold(), format!("[{index}]").dimmed());
    println!();

    for record in records {
        let currency = record.native_currency;
        println!("      {}      {}", "Network".cyan().bold(), record.network);
        println!("      {}     {} ({} decimals)", "Currency".cyan().bold(), currency.symbol.dimmed(), currency.decimals);
        println!("      {}      {}", "Address".cyan().bold(), record.address.green());
        if show_secrets {
            match &record.secret_key {
                Some(secret) => println!("      {}   {}", "Secret Key".cyan().bold(), secret.as_str()),
                None => println!("      {}   {}", "Secret Key".cyan().bold(), "(re-derived on demand)".dimmed()),
            }
        }
        println!();
    }
}
