//! SLIP-0010 ed25519 key derivation.
//!
//! Reference: <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

/// HMAC key for the ed25519 master node.
const CURVE_KEY: &[u8] = b"ed25519 seed";

/// Hardened index bit.
const HARDENED: u32 = 0x8000_0000;

/// A SLIP-0010 node: 32 bytes of key material plus a chain code.
pub struct Node {
    /// 32-byte private key.
    pub key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    pub chain_code: Zeroizing<[u8; 32]>,
}

impl Node {
    /// Master node from a BIP-39 seed.
    pub fn master(seed: &[u8]) -> Result<Self, Error> {
        Self::split(hmac_sha512(CURVE_KEY, |mac| mac.update(seed))?)
    }

    /// Child node at a hardened index.
    ///
    /// ed25519 only admits hardened derivation, so the hardened bit is set
    /// unconditionally.
    pub fn child(&self, index: u32) -> Result<Self, Error> {
        let hardened_index = index | HARDENED;
        let digest = hmac_sha512(&*self.chain_code, |mac| {
            mac.update(&[0x00]);
            mac.update(&*self.key);
            mac.update(&hardened_index.to_be_bytes());
        })?;
        Self::split(digest)
    }

    /// Walk a hardened path from the seed, e.g. `[44, 501, 0, 0]` for
    /// `m/44'/501'/0'/0'`.
    pub fn derive(seed: &[u8], path: &[u32]) -> Result<Self, Error> {
        let mut node = Self::master(seed)?;
        for &index in path {
            node = node.child(index)?;
        }
        Ok(node)
    }

    fn split(digest: [u8; 64]) -> Result<Self, Error> {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);
        Ok(Self { key, chain_code })
    }
}

fn hmac_sha512(key: &[u8], feed: impl FnOnce(&mut HmacSha512)) -> Result<[u8; 64], Error> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| Error::InvalidKeyMaterial)?;
    feed(&mut mac);
    Ok(mac.finalize().into_bytes().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SLIP-0010 ed25519 test vector 1.
    const SEED_HEX: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn master_node_matches_vector() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let master = Node::master(&seed).unwrap();

        assert_eq!(
            hex::encode(&*master.key),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(&*master.chain_code),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn hardened_child_matches_vector() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let child = Node::derive(&seed, &[0]).unwrap();

        assert_eq!(
            hex::encode(&*child.key),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
        assert_eq!(
            hex::encode(&*child.chain_code),
            "8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69"
        );
    }

    #[test]
    fn path_walk_equals_chained_children() {
        let seed = [7u8; 64];
        let walked = Node::derive(&seed, &[44, 501, 2, 0]).unwrap();
        let chained = Node::master(&seed)
            .unwrap()
            .child(44)
            .unwrap()
            .child(501)
            .unwrap()
            .child(2)
            .unwrap()
            .child(0)
            .unwrap();

        assert_eq!(&*walked.key, &*chained.key);
        assert_eq!(&*walked.chain_code, &*chained.chain_code);
    }
}
