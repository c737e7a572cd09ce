//! Entity kinds recognized by the scanner.

use serde::{Deserialize, Serialize};

/// The closed set of entity kinds the scanner can extract.
///
/// Labels follow the snake_case identifiers used throughout the crate
/// (`"btc_wallet"`, `"long_string"`, ...). The set is fixed: every kind has
/// exactly one grammar in the catalog, compiled at scanner construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Email address (`info@example.com`).
    Email,
    /// Website URL, with optional scheme and path.
    Website,
    /// Twitter handle; extracted without the leading `@`.
    Twitter,
    /// Bitcoin wallet address (`bc1`, `1`, or `3` prefix).
    BtcWallet,
    /// Ethereum wallet address (`0x` + 40 hex digits).
    EthWallet,
    /// Monero wallet address (95 characters, `4` or `8` prefix).
    MoneroWallet,
    /// Dash wallet address (`X` prefix).
    DashWallet,
    /// Cardano wallet address (`addr1` prefix).
    CardanoWallet,
    /// Dogecoin wallet address (`D` prefix).
    DogeWallet,
    /// Litecoin wallet address (`L`, `M`, or `3` prefix).
    LitecoinWallet,
    /// Ripple wallet address (`r` prefix).
    RippleWallet,
    /// Stellar wallet address (`G` prefix).
    StellarWallet,
    /// Transaction hash (64 hex digits).
    TransactionHash,
    /// Monetary amount with a currency marker (`USD 1,200.50`, `99.99€`).
    Price,
    /// Latitude/longitude pair, range-checked, comma separated.
    ///
    /// The label is `"latlon"`, one word; snake_case renaming would split it.
    #[serde(rename = "latlon")]
    LatLon,
    /// Generic high-entropy token: 20+ characters of `[A-Za-z0-9_.-]`.
    LongString,
}

impl EntityKind {
    /// Every kind, in catalog order.
    pub const ALL: [EntityKind; 16] = [
        EntityKind::Email,
        EntityKind::Website,
        EntityKind::Twitter,
        EntityKind::BtcWallet,
        EntityKind::EthWallet,
        EntityKind::MoneroWallet,
        EntityKind::DashWallet,
        EntityKind::CardanoWallet,
        EntityKind::DogeWallet,
        EntityKind::LitecoinWallet,
        EntityKind::RippleWallet,
        EntityKind::StellarWallet,
        EntityKind::TransactionHash,
        EntityKind::Price,
        EntityKind::LatLon,
        EntityKind::LongString,
    ];

    /// Stable snake_case label for this kind.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            EntityKind::Email => "email",
            EntityKind::Website => "website",
            EntityKind::Twitter => "twitter",
            EntityKind::BtcWallet => "btc_wallet",
            EntityKind::EthWallet => "eth_wallet",
            EntityKind::MoneroWallet => "monero_wallet",
            EntityKind::DashWallet => "dash_wallet",
            EntityKind::CardanoWallet => "cardano_wallet",
            EntityKind::DogeWallet => "doge_wallet",
            EntityKind::LitecoinWallet => "litecoin_wallet",
            EntityKind::RippleWallet => "ripple_wallet",
            EntityKind::StellarWallet => "stellar_wallet",
            EntityKind::TransactionHash => "transaction_hash",
            EntityKind::Price => "price",
            EntityKind::LatLon => "latlon",
            EntityKind::LongString => "long_string",
        }
    }

    /// Parse a label back into a kind. Case-insensitive.
    ///
    /// Returns `None` for anything outside the closed kind set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_ascii_lowercase();
        EntityKind::ALL.iter().copied().find(|k| k.as_label() == label)
    }

    /// Whether this kind's matches are surfaced as pairs rather than
    /// single strings. True only for [`EntityKind::LatLon`].
    #[must_use]
    pub fn is_paired(&self) -> bool {
        matches!(self, EntityKind::LatLon)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for kind in EntityKind::ALL {
            let label = kind.as_label();
            assert_eq!(EntityKind::from_label(label), Some(kind));
        }
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(EntityKind::from_label("ETH_WALLET"), Some(EntityKind::EthWallet));
        assert_eq!(EntityKind::from_label("LatLon"), Some(EntityKind::LatLon));
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(EntityKind::from_label("ssn"), None);
        assert_eq!(EntityKind::from_label(""), None);
    }

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in EntityKind::ALL {
            assert!(seen.insert(kind.as_label()), "duplicate kind: {kind}");
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_only_latlon_is_paired() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.is_paired(), kind == EntityKind::LatLon);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&EntityKind::BtcWallet).unwrap();
        assert_eq!(json, "\"btc_wallet\"");
        let back: EntityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntityKind::BtcWallet);
    }

    #[test]
    fn test_serde_agrees_with_as_label_for_every_kind() {
        // `as_label` and serde are the same labeling surface; they must
        // never drift apart for any kind.
        for kind in EntityKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_label()), "serde label drift for {kind}");

            let back: EntityKind = serde_json::from_str(&format!("\"{}\"", kind.as_label()))
                .unwrap_or_else(|e| panic!("label {} not accepted by serde: {e}", kind.as_label()));
            assert_eq!(back, kind);
        }
    }
}
