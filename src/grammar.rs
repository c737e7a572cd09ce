//! Declarative grammar catalog: one pattern per entity kind.
//!
//! Grammars are defined once as a static table and compiled eagerly by
//! [`EntityScanner::new`](crate::EntityScanner::new). Each entry pairs a
//! regex source with a result shape describing how raw captures map to the
//! kind's output (whole match, one capture group, or a pair of groups).
//!
//! The patterns are deliberately lexical: no checksum validation, no Luhn,
//! no DNS. A match means "this looks like one", nothing stronger.

use crate::EntityKind;

/// How a grammar's raw captures map to the kind's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Surface the entire matched substring.
    Full,
    /// Surface a single capture group (1-based).
    Group(usize),
    /// Surface two capture groups as a `(String, String)` pair.
    Pair(usize, usize),
}

/// A grammar definition: kind + regex source + result shape.
pub(crate) struct GrammarSpec {
    /// The kind this grammar extracts.
    pub kind: EntityKind,
    /// Regex source, compiled at scanner construction.
    pub pattern: &'static str,
    /// How captures are surfaced.
    pub shape: Shape,
    /// Reject a match when the byte immediately before or after it is an
    /// ASCII digit. Stands in for `(?<!\d)`/`(?!\d)`, which the linear-time
    /// regex engine does not support.
    pub digit_guard: bool,
}

impl GrammarSpec {
    const fn new(kind: EntityKind, pattern: &'static str, shape: Shape) -> Self {
        Self { kind, pattern, shape, digit_guard: false }
    }

    const fn digit_guarded(kind: EntityKind, pattern: &'static str, shape: Shape) -> Self {
        Self { kind, pattern, shape, digit_guard: true }
    }
}

/// The full grammar catalog, in [`EntityKind::ALL`] order.
///
/// The scanner relies on entry `i` describing the kind with discriminant `i`;
/// `tests::catalog_order_matches_kinds` pins that down.
pub(crate) const CATALOG: &[GrammarSpec] = &[
    // =========================================================================
    // Contact identifiers
    // =========================================================================
    GrammarSpec::new(
        EntityKind::Email,
        r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b",
        Shape::Full,
    ),
    GrammarSpec::new(
        EntityKind::Website,
        r"\b(?:https?://)?(?:www\.)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?:/[^\s]*)?\b",
        Shape::Full,
    ),
    // Handle surfaced without the leading `@`.
    GrammarSpec::new(EntityKind::Twitter, r"@([A-Za-z0-9_]{1,15})\b", Shape::Group(1)),
    // =========================================================================
    // Cryptocurrency addresses
    //
    // Body alphabets are Base58: alphanumeric minus the visually ambiguous
    // `0 O I l`. Prefixes are literal per chain convention.
    // =========================================================================
    GrammarSpec::new(
        EntityKind::BtcWallet,
        r"\b(?:bc1|[13])[1-9A-HJ-NP-Za-km-z]{25,39}\b",
        Shape::Full,
    ),
    // No trailing boundary: a 40-digit prefix of a longer hex run still
    // counts, so a 64-digit transaction hash yields an overlapping candidate
    // here. Cross-kind reconciliation is the caller's job.
    GrammarSpec::new(EntityKind::EthWallet, r"\b0x[a-fA-F0-9]{40}", Shape::Full),
    GrammarSpec::new(
        EntityKind::MoneroWallet,
        r"\b[48][0-9AB][1-9A-HJ-NP-Za-km-z]{93}\b",
        Shape::Full,
    ),
    GrammarSpec::new(EntityKind::DashWallet, r"\bX[1-9A-HJ-NP-Za-km-z]{33}\b", Shape::Full),
    GrammarSpec::new(EntityKind::CardanoWallet, r"\baddr1[a-z0-9]+\b", Shape::Full),
    GrammarSpec::new(EntityKind::DogeWallet, r"\bD[a-zA-Z0-9_.-]{33}\b", Shape::Full),
    GrammarSpec::new(
        EntityKind::LitecoinWallet,
        r"\b[LM3][1-9A-HJ-NP-Za-km-z]{26,33}\b",
        Shape::Full,
    ),
    GrammarSpec::new(EntityKind::RippleWallet, r"\br[0-9a-zA-Z]{33}\b", Shape::Full),
    GrammarSpec::new(EntityKind::StellarWallet, r"\bG[0-9A-Z]{40,60}\b", Shape::Full),
    GrammarSpec::new(EntityKind::TransactionHash, r"\b[a-fA-F0-9]{64}\b", Shape::Full),
    // =========================================================================
    // Amounts and coordinates
    // =========================================================================
    // Two branches: currency marker before the amount (2-digit cents tail
    // required) or after it (tail optional). The whole expression is
    // surfaced; `.` and `,` are both accepted as group and decimal
    // separators, so "1.234" stays locale-ambiguous on purpose.
    GrammarSpec::new(
        EntityKind::Price,
        r"(?:(?:USD|EUR|€|\$)\s?\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})|\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?\s?(?:USD|EUR|€|\$))",
        Shape::Full,
    ),
    // Latitude in [-90, 90], longitude in [-180, 180], enforced by the
    // pattern itself. The digit guard keeps a pair from starting or ending
    // inside a longer number ("200.0,10.0" yields nothing).
    GrammarSpec::digit_guarded(
        EntityKind::LatLon,
        r"([-+]?(?:[1-8]?\d(?:\.\d+)?|90(?:\.0+)?))\s*,\s*([-+]?(?:180(?:\.0+)?|(?:1[0-7]\d|[1-9]?\d)(?:\.\d+)?))",
        Shape::Pair(1, 2),
    ),
    // =========================================================================
    // Catch-all
    // =========================================================================
    // Runs the specific kinds above would also match; callers scan those
    // first and treat this as the uncategorized remainder.
    GrammarSpec::new(EntityKind::LongString, r"\b[a-zA-Z0-9_.-]{20,}\b", Shape::Full),
];
