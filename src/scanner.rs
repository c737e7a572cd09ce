//! The entity scanner: compiled grammar catalog + per-kind extraction.
//!
//! `EntityScanner` compiles every grammar in the catalog once, at
//! construction, and after that is immutable. Scans are pure functions of
//! the input text: leftmost, non-overlapping matching with no shared state
//! between kinds, so the same text always yields the same, identically
//! ordered results.
//!
//! Kinds are scanned independently and may overlap across kinds (an email
//! is also a `long_string` candidate; a transaction hash contains an
//! eth-wallet-sized hex run). The scanner does not deduplicate across
//! kinds; callers wanting one label per span should run the specific kinds
//! first and reconcile.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::{Shape, CATALOG};
use crate::{EntityKind, Error, Result};

/// Result of scanning one kind over one text.
///
/// Scalar kinds yield `Strings`; `latlon` yields `Pairs` so the
/// latitude/longitude split survives (flattening them into one string would
/// lose which side of the comma each number came from).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Matches {
    /// One string per match, in order of occurrence.
    Strings(Vec<String>),
    /// One `(first, second)` capture pair per match, in order of occurrence.
    Pairs(Vec<(String, String)>),
}

impl Matches {
    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Matches::Strings(v) => v.len(),
            Matches::Pairs(v) => v.len(),
        }
    }

    /// Whether the scan found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scalar matches, or `None` for a pair-shaped result.
    #[must_use]
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Matches::Strings(v) => Some(v),
            Matches::Pairs(_) => None,
        }
    }

    /// Capture pairs, or `None` for a scalar-shaped result.
    #[must_use]
    pub fn as_pairs(&self) -> Option<&[(String, String)]> {
        match self {
            Matches::Strings(_) => None,
            Matches::Pairs(v) => Some(v),
        }
    }

    fn into_strings(self) -> Vec<String> {
        match self {
            Matches::Strings(v) => v,
            Matches::Pairs(_) => Vec::new(),
        }
    }

    fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            Matches::Strings(_) => Vec::new(),
            Matches::Pairs(v) => v,
        }
    }
}

/// One compiled grammar.
struct Grammar {
    regex: Regex,
    shape: Shape,
    digit_guard: bool,
}

/// Scanner over the fixed entity-kind catalog.
///
/// Construction compiles all grammars eagerly and fails fast on a malformed
/// pattern; scans never fail. The compiled catalog is read-only, so a
/// scanner can be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use sleuth::EntityScanner;
///
/// let scanner = EntityScanner::new().unwrap();
/// let emails = scanner.find_emails("Contact: info@example.com");
/// assert_eq!(emails, vec!["info@example.com"]);
/// ```
pub struct EntityScanner {
    /// Indexed by `EntityKind as usize`; `CATALOG` order is pinned by test.
    grammars: Vec<Grammar>,
}

impl EntityScanner {
    /// Compile the grammar catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Grammar`] naming the offending kind if any pattern
    /// fails to compile. This is the only failure mode in the crate.
    pub fn new() -> Result<Self> {
        let mut grammars = Vec::with_capacity(CATALOG.len());
        for spec in CATALOG {
            let regex = Regex::new(spec.pattern)
                .map_err(|source| Error::grammar(spec.kind, source))?;
            debug_assert_eq!(spec.kind as usize, grammars.len());
            grammars.push(Grammar {
                regex,
                shape: spec.shape,
                digit_guard: spec.digit_guard,
            });
        }
        log::debug!("compiled {} entity grammars", grammars.len());
        Ok(Self { grammars })
    }

    /// Scan `text` for one kind.
    ///
    /// Matching is leftmost and non-overlapping within the kind: once a
    /// match consumes characters, the next search resumes after it. An
    /// empty or non-matching text yields an empty result, never an error.
    #[must_use]
    pub fn scan(&self, kind: EntityKind, text: &str) -> Matches {
        let grammar = &self.grammars[kind as usize];
        log::trace!("scanning {} bytes for {kind}", text.len());
        match grammar.shape {
            Shape::Full => Matches::Strings(
                grammar
                    .regex
                    .find_iter(text)
                    .filter(|m| span_allowed(grammar, text, m.start(), m.end()))
                    .map(|m| m.as_str().to_string())
                    .collect(),
            ),
            Shape::Group(g) => Matches::Strings(
                grammar
                    .regex
                    .captures_iter(text)
                    .filter(|c| whole_match_allowed(grammar, text, c))
                    .filter_map(|c| c.get(g).map(|m| m.as_str().to_string()))
                    .collect(),
            ),
            Shape::Pair(a, b) => Matches::Pairs(
                grammar
                    .regex
                    .captures_iter(text)
                    .filter(|c| whole_match_allowed(grammar, text, c))
                    .filter_map(|c| match (c.get(a), c.get(b)) {
                        (Some(x), Some(y)) => {
                            Some((x.as_str().to_string(), y.as_str().to_string()))
                        }
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }

    // --- Contact identifiers ---

    /// Email addresses, in order of occurrence.
    #[must_use]
    pub fn find_emails(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::Email, text).into_strings()
    }

    /// Website URLs, in order of occurrence.
    #[must_use]
    pub fn find_websites(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::Website, text).into_strings()
    }

    /// Twitter handles, without the leading `@`.
    #[must_use]
    pub fn find_twitter_handles(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::Twitter, text).into_strings()
    }

    // --- Cryptocurrency ---

    /// Bitcoin wallet addresses, prefix included.
    #[must_use]
    pub fn find_btc_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::BtcWallet, text).into_strings()
    }

    /// Ethereum wallet addresses (`0x` + exactly 40 hex digits).
    #[must_use]
    pub fn find_eth_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::EthWallet, text).into_strings()
    }

    /// Monero wallet addresses.
    #[must_use]
    pub fn find_monero_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::MoneroWallet, text).into_strings()
    }

    /// Dash wallet addresses.
    #[must_use]
    pub fn find_dash_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::DashWallet, text).into_strings()
    }

    /// Cardano wallet addresses.
    #[must_use]
    pub fn find_cardano_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::CardanoWallet, text).into_strings()
    }

    /// Dogecoin wallet addresses.
    #[must_use]
    pub fn find_doge_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::DogeWallet, text).into_strings()
    }

    /// Litecoin wallet addresses.
    #[must_use]
    pub fn find_litecoin_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::LitecoinWallet, text).into_strings()
    }

    /// Ripple wallet addresses.
    #[must_use]
    pub fn find_ripple_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::RippleWallet, text).into_strings()
    }

    /// Stellar wallet addresses.
    #[must_use]
    pub fn find_stellar_wallets(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::StellarWallet, text).into_strings()
    }

    /// 64-hex-digit transaction hashes.
    #[must_use]
    pub fn find_transaction_hashes(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::TransactionHash, text).into_strings()
    }

    // --- Amounts and coordinates ---

    /// Price expressions (USD, EUR, `€`, `$`), each as the entire matched
    /// substring. Callers needing a structured amount + currency re-parse
    /// the returned string.
    #[must_use]
    pub fn find_prices(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::Price, text).into_strings()
    }

    /// `(latitude, longitude)` pairs, range-checked.
    #[must_use]
    pub fn find_latlon(&self, text: &str) -> Vec<(String, String)> {
        self.scan(EntityKind::LatLon, text).into_pairs()
    }

    // --- Catch-all ---

    /// Runs of 20+ characters from `[A-Za-z0-9_.-]`, word-boundary
    /// delimited. Subsumes most of the specific kinds above; scan those
    /// first and treat this as the uncategorized remainder.
    #[must_use]
    pub fn find_long_strings(&self, text: &str) -> Vec<String> {
        self.scan(EntityKind::LongString, text).into_strings()
    }
}

fn whole_match_allowed(grammar: &Grammar, text: &str, caps: &regex::Captures<'_>) -> bool {
    match caps.get(0) {
        Some(m) => span_allowed(grammar, text, m.start(), m.end()),
        None => false,
    }
}

fn span_allowed(grammar: &Grammar, text: &str, start: usize, end: usize) -> bool {
    !grammar.digit_guard || !digit_adjacent(text, start, end)
}

/// True when the byte just before `start` or just after `end` is an ASCII
/// digit. Match spans fall on character boundaries and the guarded patterns
/// are ASCII, so byte inspection is enough.
fn digit_adjacent(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start > 0 && bytes[start - 1].is_ascii_digit();
    let after = bytes.get(end).is_some_and(|b| b.is_ascii_digit());
    before || after
}
