//! Mnemonic phrase CLI commands.

use clap::Args;
use colored::Colorize;
use tetra_core::{mnemonic, Wallet};
use tetra_wallet::{classify, ImportKind};

/// Generate a new mnemonic phrase.
#[derive(Args)]
pub struct NewCommand {
    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,
}

impl NewCommand {
    /// Execute the new command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let wallet = Wallet::generate(self.words, None)?;

        println!();
        println!("      {}     {}", "Mnemonic".cyan().bold(), wallet.phrase().green());
        println!("      {}        {} words", "Words".cyan().bold(), wallet.word_count());
        println!();
        Ok(())
    }
}

/// Validate a mnemonic phrase.
#[derive(Args)]
pub struct ValidateCommand {
    /// Mnemonic phrase, abbreviated words allowed (4-letter prefixes).
    #[arg(short, long)]
    mnemonic: String,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let expanded = mnemonic::expand(&self.mnemonic)?;
        let verdict = if tetra_core::validate(&expanded) {
            "valid".green().bold()
        } else {
            "invalid".red().bold()
        };

        println!();
        println!("      {}     {}", "Mnemonic".cyan().bold(), expanded);
        println!("      {}      {}", "Verdict".cyan().bold(), verdict);
        println!();
        Ok(())
    }
}

/// Classify an import candidate.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Candidate string: mnemonic phrase or raw private key.
    #[arg(short, long)]
    candidate: String,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let kind = classify(&self.candidate)?;
        let label = match kind {
            ImportKind::Mnemonic => "mnemonic phrase",
            ImportKind::PrivateKey => "private key",
        };

        println!();
        println!("      {}         {}", "Kind".cyan().bold(), label.green());
        println!();
        Ok(())
    }
}
