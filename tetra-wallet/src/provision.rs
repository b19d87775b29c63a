//! The wallet provisioning orchestrator.

use std::thread;

use log::{debug, warn};
use tetra_core::Wallet;

use crate::error::Error;
use crate::network::Network;
use crate::record::WalletRecord;
use crate::MinaNetwork;

/// Number of networks a wallet is provisioned for.
pub const NETWORK_COUNT: usize = 4;

/// Provision wallet records for all networks from a mnemonic phrase.
///
/// Validates the phrase, then derives one record per network at
/// `account_index`, returned in fixed order: EVM, Solana, Bitcoin, Mina.
/// Mina uses the mainnet signature domain; use [`provision_with`] to pick
/// another.
///
/// Same `(phrase, account_index)` always yields identical records; this
/// determinism is the contract wallet recovery depends on.
///
/// # Errors
///
/// Returns [`Error::Phrase`] for invalid mnemonics, or the failing
/// network's wrapped error. Provisioning is all-or-nothing: no partial
/// record set is ever returned.
pub fn provision(phrase: &str, account_index: u32) -> Result<[WalletRecord; NETWORK_COUNT], Error> {
    let wallet = Wallet::from_phrase(phrase, None)?;
    provision_with(&wallet, account_index, MinaNetwork::Mainnet)
}

/// Provision wallet records from an already-imported wallet.
///
/// Skips phrase re-validation and PBKDF2 seed stretching, and selects the
/// Mina signature domain.
///
/// # Errors
///
/// See [`provision`].
pub fn provision_with(
    wallet: &Wallet,
    account_index: u32,
    mina_network: MinaNetwork,
) -> Result<[WalletRecord; NETWORK_COUNT], Error> {
    debug!("provisioning {NETWORK_COUNT} networks at account index {account_index}");

    // The four derivations are pure, CPU-bound and share nothing mutable;
    // scoped threads let them borrow the wallet and run independently.
    let (evm, sol, btc, mina) = thread::scope(|s| {
        let evm = s.spawn(|| tetra_evm::Deriver::new(wallet).derive(account_index));
        let sol = s.spawn(|| tetra_sol::Deriver::new(wallet).derive(account_index));
        let btc = s.spawn(|| {
            tetra_btc::Deriver::new(wallet, tetra_btc::Network::Mainnet)
                .and_then(|deriver| deriver.derive(account_index))
        });
        let mina = s.spawn(|| tetra_mina::Deriver::new(wallet, mina_network).derive(account_index));

        (join(evm), join(sol), join(btc), join(mina))
    });

    let evm = evm.map_err(|e| abort(Error::Evm(e)))?;
    let sol = sol.map_err(|e| abort(Error::Solana(e)))?;
    let btc = btc.map_err(|e| abort(Error::Bitcoin(e)))?;
    let mina = mina.map_err(|e| abort(Error::Mina(e)))?;

    Ok([
        record(Network::Evm, evm.address.clone(), evm.address, None),
        record(Network::Solana, sol.address, sol.public_key, Some(sol.secret_key_base58)),
        record(Network::Bitcoin, btc.address.clone(), btc.address, None),
        record(Network::Mina, mina.address, mina.public_key, Some(mina.private_key)),
    ])
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle.join().expect("deriver thread panicked")
}

fn abort(err: Error) -> Error {
    warn!("provisioning aborted: {err}");
    err
}

fn record(
    network: Network,
    address: String,
    public_key: String,
    secret_key: Option<zeroize::Zeroizing<String>>,
) -> WalletRecord {
    WalletRecord {
        network,
        address,
        public_key,
        secret_key,
        balance: 0.0,
        native_currency: network.native_currency(),
    }
}
