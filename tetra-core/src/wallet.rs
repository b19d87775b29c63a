//! Unified wallet over a BIP-39 mnemonic.

use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

/// Word counts permitted by BIP-39.
const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// A wallet rooted in a BIP-39 mnemonic.
///
/// The 64-byte seed is computed once on construction and cached; it is the
/// single input every per-network deriver consumes. The mnemonic itself is
/// the only secret that should ever be persisted (encrypted, by an external
/// store); the seed is recomputed from it on demand and both are zeroized
/// on drop.
pub struct Wallet {
    mnemonic: Mnemonic,
    passphrase: Option<String>,
    seed: Zeroizing<[u8; 64]>,
}

impl Wallet {
    /// Generate a new wallet from OS randomness.
    ///
    /// `word_count` must be 12, 15, 18, 21 or 24. The optional passphrase
    /// is the BIP-39 "25th word"; it changes every derived address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] for unsupported word counts.
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self> {
        if !VALID_WORD_COUNTS.contains(&word_count) {
            return Err(Error::InvalidWordCount(word_count));
        }
        let mnemonic = Mnemonic::generate_in(Language::English, word_count)?;
        Ok(Self::from_parts(mnemonic, passphrase))
    }

    /// Import a wallet from an existing mnemonic phrase.
    ///
    /// Leading and trailing whitespace is trimmed before validation, since
    /// user-supplied phrases routinely carry both.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mnemonic`] if the phrase fails wordlist or
    /// checksum validation.
    pub fn from_phrase(phrase: &str, passphrase: Option<&str>) -> Result<Self> {
        let mnemonic = Mnemonic::parse_in(Language::English, phrase.trim())?;
        Ok(Self::from_parts(mnemonic, passphrase))
    }

    fn from_parts(mnemonic: Mnemonic, passphrase: Option<&str>) -> Self {
        let seed = Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or("")));
        Self {
            mnemonic,
            passphrase: passphrase.map(String::from),
            seed,
        }
    }

    /// The BIP-39 seed (64 bytes) all derivers consume.
    #[inline]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// The mnemonic phrase as a space-separated string.
    #[must_use]
    pub fn phrase(&self) -> String {
        self.mnemonic.to_string()
    }

    /// Number of words in the mnemonic.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.word_count()
    }

    /// Whether a BIP-39 passphrase was supplied.
    #[must_use]
    pub fn has_passphrase(&self) -> bool {
        self.passphrase.is_some()
    }
}

impl Drop for Wallet {
    fn drop(&mut self) {
        self.mnemonic.zeroize();
        if let Some(passphrase) = self.passphrase.as_mut() {
            passphrase.zeroize();
        }
    }
}

impl core::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet")
            .field("word_count", &self.word_count())
            .field("has_passphrase", &self.has_passphrase())
            .finish()
    }
}

/// Check whether `candidate` is a valid BIP-39 mnemonic phrase.
///
/// Leading and trailing whitespace is trimmed first. Returns `false` for
/// anything that fails wordlist membership, word count or checksum rules.
#[must_use]
pub fn validate(candidate: &str) -> bool {
    Mnemonic::parse_in(Language::English, candidate.trim()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    // BIP-39 seed for TEST_MNEMONIC with an empty passphrase.
    const TEST_SEED_HEX: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
                                 9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn seed_matches_bip39_vector() {
        let wallet = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        assert_eq!(hex::encode(wallet.seed()), TEST_SEED_HEX);
    }

    #[test]
    fn seed_is_deterministic() {
        let a = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        let b = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn changing_a_word_changes_the_seed() {
        let a = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        // Same checksum class: swapping the final word for another valid
        // terminator yields a different, valid mnemonic.
        let other = "legal winner thank year wave sausage worth useful legal winner thank yellow";
        let b = Wallet::from_phrase(other, None).unwrap();
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn passphrase_changes_the_seed() {
        let a = Wallet::from_phrase(TEST_MNEMONIC, None).unwrap();
        let b = Wallet::from_phrase(TEST_MNEMONIC, Some("password")).unwrap();
        assert_ne!(a.seed(), b.seed());
        assert!(b.has_passphrase());
    }

    #[test]
    fn whitespace_is_trimmed_on_import() {
        let padded = format!("  {TEST_MNEMONIC} \n");
        let wallet = Wallet::from_phrase(&padded, None).unwrap();
        assert_eq!(wallet.phrase(), TEST_MNEMONIC);
    }

    #[test]
    fn generate_produces_valid_phrases() {
        for count in [12, 15, 18, 21, 24] {
            let wallet = Wallet::generate(count, None).unwrap();
            assert_eq!(wallet.word_count(), count);
            assert!(validate(&wallet.phrase()));
        }
    }

    #[test]
    fn generate_rejects_bad_word_count() {
        assert!(matches!(
            Wallet::generate(13, None),
            Err(Error::InvalidWordCount(13))
        ));
    }

    #[test]
    fn generated_wallets_are_unique() {
        let a = Wallet::generate(12, None).unwrap();
        let b = Wallet::generate(12, None).unwrap();
        assert_ne!(a.phrase(), b.phrase());
    }

    #[test]
    fn validate_accepts_valid_phrase() {
        assert!(validate(TEST_MNEMONIC));
        assert!(validate(&format!("  {TEST_MNEMONIC}  ")));
    }

    #[test]
    fn validate_rejects_empty_and_garbage() {
        assert!(!validate(""));
        assert!(!validate("   "));
        assert!(!validate("not a mnemonic at all"));
    }

    #[test]
    fn validate_rejects_bad_checksum() {
        // 24 valid wordlist words whose checksum does not hold.
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon \
                   abandon abandon abandon abandon abandon abandon abandon abandon \
                   abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(!validate(bad));
    }
}
