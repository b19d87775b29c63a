//! Solana account derivation from a unified wallet.

use ed25519_dalek::SigningKey;
use tetra_core::Wallet;
use zeroize::Zeroizing;

use crate::slip10::Node;
use crate::Error;

/// Solana account deriver over a unified wallet seed.
///
/// Uses the hardened path `m/44'/501'/{index}'/0'` (Phantom/Solflare
/// convention): the account index sits at the third segment, unlike the
/// secp256k1 chains where it is the final address index.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

/// A derived Solana account with associated keys.
#[derive(Debug, Clone)]
pub struct DerivedAccount {
    /// Derivation path used (e.g. `m/44'/501'/0'/0'`).
    pub path: String,
    /// Base58 of the 64-byte expanded secret (seed ‖ public key), the
    /// layout Solana tooling stores (zeroized on drop).
    pub secret_key_base58: Zeroizing<String>,
    /// Base58 of the 32-byte ed25519 public key.
    pub public_key: String,
    /// Solana address, identical to the Base58 public key.
    pub address: String,
}

impl<'a> Deriver<'a> {
    /// Create a new Solana deriver from a wallet.
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the account at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Derivation`] if SLIP-0010 derivation fails; this
    /// does not happen for well-formed 64-byte seeds.
    pub fn derive(&self, index: u32) -> Result<DerivedAccount, Error> {
        let node = Node::derive(self.wallet.seed(), &[44, 501, index, 0])
            .map_err(|e| Error::Derivation(e.to_string()))?;

        let signing_key = SigningKey::from_bytes(&node.key);
        let public_key = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
        let secret_key = Zeroizing::new(signing_key.to_keypair_bytes());

        Ok(DerivedAccount {
            path: format!("m/44'/501'/{index}'/0'"),
            secret_key_base58: Zeroizing::new(bs58::encode(&*secret_key).into_string()),
            address: public_key.clone(),
            public_key,
        })
    }

    /// Derive a run of consecutive accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if any single derivation fails.
    pub fn derive_many(&self, start_index: u32, count: u32) -> Result<Vec<DerivedAccount>, Error> {
        (start_index..start_index + count)
            .map(|index| self.derive(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_wallet() -> Wallet {
        Wallet::from_phrase(TEST_MNEMONIC, None).unwrap()
    }

    #[test]
    fn derives_wellformed_account() {
        let wallet = test_wallet();
        let account = Deriver::new(&wallet).derive(0).unwrap();

        // Base58 of 32 bytes lands in 32..=44 characters.
        assert!(account.address.len() >= 32 && account.address.len() <= 44);
        assert_eq!(account.address, account.public_key);
        assert_eq!(account.path, "m/44'/501'/0'/0'");

        // The expanded secret decodes to 64 bytes whose tail is the public key.
        let secret = bs58::decode(account.secret_key_base58.as_str()).into_vec().unwrap();
        let public = bs58::decode(&account.public_key).into_vec().unwrap();
        assert_eq!(secret.len(), 64);
        assert_eq!(&secret[32..], &public[..]);
    }

    #[test]
    fn derivation_is_deterministic() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);

        let a = deriver.derive(0).unwrap();
        let b = deriver.derive(0).unwrap();
        assert_eq!(a.address, b.address);
        assert_eq!(*a.secret_key_base58, *b.secret_key_base58);
    }

    #[test]
    fn indices_do_not_collide() {
        let wallet = test_wallet();
        let accounts = Deriver::new(&wallet).derive_many(0, 3).unwrap();

        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[1].path, "m/44'/501'/1'/0'");
        assert_ne!(accounts[0].address, accounts[1].address);
        assert_ne!(accounts[1].address, accounts[2].address);
        assert_ne!(accounts[0].address, accounts[2].address);
    }

    #[test]
    fn passphrase_changes_addresses() {
        let plain = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        let salted = Wallet::from_phrase(TEST_MNEMONIC, Some("password")).unwrap();

        let a = Deriver::new(&plain).derive(0).unwrap();
        let b = Deriver::new(&salted).derive(0).unwrap();
        assert_ne!(a.address, b.address);
    }
}
