//! Raw private-key validation for the import flow.
//!
//! The import flow accepts either a mnemonic phrase or a raw EVM-style
//! private key; this check distinguishes the latter by parsing the
//! candidate as a 32-byte secp256k1 scalar.

use k256::ecdsa::SigningKey;

use crate::Error;

/// Check whether `candidate` parses as a valid EVM private key.
///
/// Leading/trailing whitespace and an optional `0x` prefix are tolerated.
/// Returns `false` for anything that is not 32 bytes of hex on the
/// secp256k1 scalar field.
#[must_use]
pub fn validate_private_key(candidate: &str) -> bool {
    parse_private_key(candidate).is_ok()
}

/// Parse a hex-encoded private key into a signing key.
///
/// # Errors
///
/// Returns [`Error::InvalidHex`] for non-hex input and
/// [`Error::InvalidPrivateKey`] for out-of-range scalars.
pub(crate) fn parse_private_key(candidate: &str) -> Result<SigningKey, Error> {
    let trimmed = candidate.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    let bytes = hex::decode(stripped).map_err(|_| Error::InvalidHex)?;
    SigningKey::from_slice(&bytes).map_err(|_| Error::InvalidPrivateKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deriver::address_from_uncompressed;

    const KEY: &str = "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727";

    #[test]
    fn accepts_valid_key() {
        assert!(validate_private_key(KEY));
    }

    #[test]
    fn accepts_0x_prefix_and_whitespace() {
        assert!(validate_private_key(&format!("0x{KEY}")));
        assert!(validate_private_key(&format!("  {KEY}\n")));
    }

    #[test]
    fn rejects_mnemonic_phrases() {
        assert!(!validate_private_key(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        ));
    }

    #[test]
    fn rejects_wrong_length_and_non_hex() {
        assert!(!validate_private_key(""));
        assert!(!validate_private_key("1ab42c"));
        assert!(!validate_private_key(&format!("{KEY}00")));
        assert!(!validate_private_key(&"zz".repeat(32)));
    }

    #[test]
    fn rejects_zero_scalar() {
        assert!(!validate_private_key(&"00".repeat(32)));
    }

    #[test]
    fn parsed_key_matches_derived_address() {
        let key = parse_private_key(KEY).unwrap();
        let public_key = key.verifying_key().to_encoded_point(false);
        let address = address_from_uncompressed(public_key.as_bytes());
        assert_eq!(address.to_checksum(None), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }
}
