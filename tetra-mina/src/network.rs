//! Mina network types.

use mina_signer::NetworkId;

/// Supported Mina networks.
///
/// The network scopes the signature domain only; derivation paths and
/// `B62q…` addresses are identical across networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// Mina mainnet.
    #[default]
    Mainnet,
    /// Mina testnet (devnet signature domain).
    Testnet,
}

impl Network {
    /// Convert to the mina-signer network identifier.
    #[inline]
    #[must_use]
    pub const fn to_network_id(self) -> NetworkId {
        match self {
            Self::Mainnet => NetworkId::MAINNET,
            Self::Testnet => NetworkId::TESTNET,
        }
    }

    /// Network name as string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
