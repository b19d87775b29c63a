//! BIP-39 mnemonic prefix expansion.
//!
//! The BIP-39 English wordlist guarantees that every word is uniquely
//! identified by its first four characters. The import flow uses this to
//! accept abbreviated phrases: each token is either an exact wordlist word
//! or a unique prefix of one.
//!
//! # Example
//!
//! ```
//! use tetra_core::mnemonic;
//!
//! let expanded = mnemonic::expand("aban aban aban aban aban aban aban aban aban aban aban abou").unwrap();
//! assert_eq!(
//!     expanded,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! ```

use bip39::Language;

use crate::error::{Error, Result};

/// Shortest prefix the English wordlist disambiguates.
const MIN_PREFIX_LEN: usize = 4;

/// Expand abbreviated words in a phrase to their full BIP-39 form.
///
/// # Errors
///
/// Returns [`Error::PrefixTooShort`] for non-exact tokens under four
/// characters, [`Error::UnknownPrefix`] for tokens matching no word and
/// [`Error::AmbiguousPrefix`] for tokens matching several.
pub fn expand(phrase: &str) -> Result<String> {
    expand_in(Language::English, phrase)
}

/// Expand abbreviated words using the specified language wordlist.
///
/// # Errors
///
/// See [`expand`].
pub fn expand_in(language: Language, phrase: &str) -> Result<String> {
    let words = phrase
        .split_whitespace()
        .map(|token| expand_word(language, token))
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(" "))
}

/// Resolve one token to a full wordlist word.
fn expand_word(language: Language, token: &str) -> Result<&'static str> {
    let matches = language.words_by_prefix(token);

    // Exact words pass through, including the handful shorter than four
    // characters ("zoo", "art", ...). A full word may itself prefix other
    // words ("win" prefixes "window"), so membership wins over cardinality.
    if let Some(word) = matches.iter().copied().find(|word| *word == token) {
        return Ok(word);
    }

    if token.len() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: token.into(),
            min_len: MIN_PREFIX_LEN,
        });
    }

    match matches {
        &[] => Err(Error::UnknownPrefix(token.into())),
        &[word] => Ok(word),
        _ => Err(Error::AmbiguousPrefix {
            prefix: token.into(),
            candidates: matches.iter().map(|w| String::from(*w)).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn full_words_pass_through() {
        assert_eq!(expand(FULL_12).unwrap(), FULL_12);
    }

    #[test]
    fn four_letter_prefixes_expand() {
        let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban abou";
        assert_eq!(expand(abbreviated).unwrap(), FULL_12);
    }

    #[test]
    fn mixed_full_and_abbreviated() {
        let input = "abandon aban abandon aban abandon aban abandon aban abandon aban abandon about";
        assert_eq!(expand(input).unwrap(), FULL_12);
    }

    #[test]
    fn longer_unique_prefixes_work() {
        let input = "abando abando abando abando abando abando abando abando abando abando abando about";
        assert_eq!(expand(input).unwrap(), FULL_12);
    }

    #[test]
    fn short_prefixes_rejected() {
        let result = expand("aba aba aba aba aba aba aba aba aba aba aba aba");
        assert!(matches!(result, Err(Error::PrefixTooShort { .. })));
    }

    #[test]
    fn unknown_prefixes_rejected() {
        let result = expand("aban aban aban aban aban aban aban aban aban aban aban zzzz");
        assert!(matches!(result, Err(Error::UnknownPrefix(_))));
    }

    #[test]
    fn exact_short_words_accepted() {
        assert_eq!(expand("zoo art ice").unwrap(), "zoo art ice");
    }

    #[test]
    fn assorted_prefixes_expand_correctly() {
        let result = expand("abil acti addr admi wall wris").unwrap();
        assert_eq!(result, "ability action address admit wall wrist");
    }
}
