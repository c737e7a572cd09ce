//! # sleuth
//!
//! Pattern-based extraction of OSINT entities from free text.
//!
//! A fixed catalog of grammars, one per entity kind, is compiled once at
//! scanner construction; each scan is a pure, leftmost, non-overlapping pass
//! over the input. This is a lexical scanner, not a validator: it does not
//! check wallet checksums, resolve domains, or Luhn-verify anything. A match
//! means "this looks like one".
//!
//! ## Kinds
//!
//! | Kind | Example | Output shape |
//! |------|---------|--------------|
//! | `email` | `info@example.com` | string |
//! | `website` | `https://www.example.com/about` | string |
//! | `twitter` | `@cyb_detective` → `cyb_detective` | string, `@` stripped |
//! | `btc_wallet` | `1BoatSLRHtKNngkdXEeobR76b53LETtpyT` | string |
//! | `eth_wallet` | `0x742d35Cc...` | string |
//! | `monero_wallet`, `dash_wallet`, `cardano_wallet`, `doge_wallet`, `litecoin_wallet`, `ripple_wallet`, `stellar_wallet` | chain-prefixed addresses | string |
//! | `transaction_hash` | 64 hex digits | string |
//! | `price` | `USD 1,200.50`, `99.99€` | string, full expression |
//! | `latlon` | `40.7128,-74.0060` | `(lat, lon)` pair |
//! | `long_string` | any 20+ run of `[A-Za-z0-9_.-]` | string |
//!
//! ## Quick start
//!
//! ```rust
//! use sleuth::{EntityKind, EntityScanner};
//!
//! let scanner = EntityScanner::new()?;
//! let text = "Ping @cyb_detective, rate USD 1,200.50";
//!
//! assert_eq!(scanner.find_twitter_handles(text), vec!["cyb_detective"]);
//! assert_eq!(scanner.find_prices(text), vec!["USD 1,200.50"]);
//!
//! // Or dispatch generically over the kind set:
//! for kind in EntityKind::ALL {
//!     let matches = scanner.scan(kind, text);
//!     if !matches.is_empty() {
//!         println!("{kind}: {matches:?}");
//!     }
//! }
//! # Ok::<(), sleuth::Error>(())
//! ```
//!
//! ## Overlap across kinds
//!
//! Kinds are scanned independently. A wallet address is also a
//! `long_string`; a transaction hash contains an eth-wallet-sized hex run.
//! The scanner never deduplicates across kinds: run the specific kinds
//! first and treat `long_string` as the uncategorized remainder.
//!
//! ## Engine notes
//!
//! Matching uses the `regex` crate's linear-time engine, so the greedy
//! unbounded quantifiers in `website` and `long_string` cannot trigger
//! catastrophic backtracking. No input length cap is enforced; callers
//! scanning untrusted multi-megabyte blobs should cap at the boundary.

#![warn(missing_docs)]

mod error;
mod grammar;
mod kind;
mod scanner;

pub use error::{Error, Result};
pub use kind::EntityKind;
pub use scanner::{EntityScanner, Matches};

use once_cell::sync::Lazy;

/// Process-wide scanner, compiled on first use.
///
/// The grammar catalog is a compile-time constant, so a failure here is a
/// programmer error; this panics instead of returning `Result`. Use
/// [`EntityScanner::new`] when you want the error surfaced.
#[must_use]
pub fn shared() -> &'static EntityScanner {
    static SHARED: Lazy<EntityScanner> = Lazy::new(|| {
        EntityScanner::new().expect("built-in grammar catalog is invalid")
    });
    &SHARED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_scanner_works() {
        let s = shared();
        assert_eq!(s.find_emails("x@y.dev"), vec!["x@y.dev"]);
        // Same instance on every call.
        assert!(std::ptr::eq(shared(), s));
    }
}
