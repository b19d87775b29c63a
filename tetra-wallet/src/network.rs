//! The closed set of provisioned networks.

use serde::{Deserialize, Serialize};

/// Networks a wallet is provisioned for.
///
/// Adding a network means adding a variant here; every dispatch over
/// networks is an exhaustive match, so the compiler walks the codebase
/// for you.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// EVM-compatible chains (Ethereum and friends).
    Evm,
    /// Solana.
    Solana,
    /// Bitcoin.
    Bitcoin,
    /// Mina.
    Mina,
}

/// Static currency metadata attached to every wallet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    /// Currency name.
    pub name: &'static str,
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Decimal places of the base unit.
    pub decimals: u8,
}

/// Whether a network's records carry the derived secret key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretPolicy {
    /// The record carries the network-native secret key string.
    Exposed,
    /// No secret in the record; keys are re-derived from the mnemonic
    /// when signing is needed.
    OnDemand,
}

impl Network {
    /// All networks in provisioning order.
    pub const ALL: [Self; 4] = [Self::Evm, Self::Solana, Self::Bitcoin, Self::Mina];

    /// Native currency metadata for this network.
    #[must_use]
    pub const fn native_currency(self) -> NativeCurrency {
        match self {
            Self::Evm => NativeCurrency { name: "ETH", symbol: "ETH", decimals: 18 },
            Self::Solana => NativeCurrency { name: "SOL", symbol: "SOL", decimals: 9 },
            Self::Bitcoin => NativeCurrency { name: "BTC", symbol: "BTC", decimals: 8 },
            Self::Mina => NativeCurrency { name: "MINA", symbol: "MINA", decimals: 9 },
        }
    }

    /// Secret-exposure policy for this network's records.
    ///
    /// Solana and Mina records carry their secret key (their tooling
    /// imports the encoded secret directly); EVM and Bitcoin keys are
    /// re-derived from the mnemonic on demand instead of being cached.
    #[must_use]
    pub const fn secret_policy(self) -> SecretPolicy {
        match self {
            Self::Solana | Self::Mina => SecretPolicy::Exposed,
            Self::Evm | Self::Bitcoin => SecretPolicy::OnDemand,
        }
    }

    /// Network name as string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Solana => "solana",
            Self::Bitcoin => "bitcoin",
            Self::Mina => "mina",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_metadata_is_fixed() {
        assert_eq!(Network::Evm.native_currency().decimals, 18);
        assert_eq!(Network::Solana.native_currency().decimals, 9);
        assert_eq!(Network::Bitcoin.native_currency().decimals, 8);
        assert_eq!(Network::Mina.native_currency().decimals, 9);
    }

    #[test]
    fn secret_policy_per_network() {
        assert_eq!(Network::Solana.secret_policy(), SecretPolicy::Exposed);
        assert_eq!(Network::Mina.secret_policy(), SecretPolicy::Exposed);
        assert_eq!(Network::Evm.secret_policy(), SecretPolicy::OnDemand);
        assert_eq!(Network::Bitcoin.secret_policy(), SecretPolicy::OnDemand);
    }
}
