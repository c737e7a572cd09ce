//! Property-based tests for scanner invariants.
//!
//! These verify contracts that must hold for ALL inputs, not just the
//! fixtures: idempotence, output alphabets, and the numeric ranges the
//! latlon grammar promises.

use proptest::prelude::*;
use sleuth::{EntityKind, EntityScanner};

fn scanner() -> EntityScanner {
    EntityScanner::new().expect("catalog compiles")
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
}

proptest! {
    #[test]
    fn scans_are_idempotent(text in ".{0,300}") {
        let s = scanner();
        for kind in EntityKind::ALL {
            prop_assert_eq!(s.scan(kind, &text), s.scan(kind, &text));
        }
    }

    #[test]
    fn long_strings_are_at_least_20_token_chars(text in ".{0,300}") {
        let s = scanner();
        for found in s.find_long_strings(&text) {
            prop_assert!(found.len() >= 20, "too short: {found:?}");
            prop_assert!(found.chars().all(is_token_char), "bad char in {found:?}");
            prop_assert!(text.contains(&found));
        }
    }

    // Denser token soup so the long_string grammar actually fires.
    #[test]
    fn long_strings_from_token_soup(text in "[A-Za-z0-9_. -]{0,200}") {
        let s = scanner();
        for found in s.find_long_strings(&text) {
            prop_assert!(found.len() >= 20);
            prop_assert!(found.chars().all(is_token_char));
        }
    }

    #[test]
    fn twitter_handles_never_keep_the_at_sign(text in "[@A-Za-z0-9_ ]{0,200}") {
        let s = scanner();
        for handle in s.find_twitter_handles(&text) {
            prop_assert!(!handle.contains('@'), "handle kept @: {handle:?}");
            prop_assert!((1..=15).contains(&handle.len()));
        }
    }

    #[test]
    fn latlon_pairs_parse_in_range(text in "[0-9+\\-., ]{0,120}") {
        let s = scanner();
        for (lat, lon) in s.find_latlon(&text) {
            let lat: f64 = lat.parse().expect("latitude is numeric");
            let lon: f64 = lon.parse().expect("longitude is numeric");
            prop_assert!((-90.0..=90.0).contains(&lat), "lat out of range: {lat}");
            prop_assert!((-180.0..=180.0).contains(&lon), "lon out of range: {lon}");
        }
    }

    #[test]
    fn eth_wallets_are_exactly_42_hex_chars(text in "[0-9a-fxA-FX ]{0,200}") {
        let s = scanner();
        for addr in s.find_eth_wallets(&text) {
            prop_assert!(addr.starts_with("0x"));
            prop_assert_eq!(addr.len(), 42);
            prop_assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn prices_always_carry_a_currency_marker(text in "[0-9USDEUR$\u{20ac}., ]{0,150}") {
        let s = scanner();
        for price in s.find_prices(&text) {
            let marked = price.contains("USD")
                || price.contains("EUR")
                || price.contains('$')
                || price.contains('\u{20ac}');
            prop_assert!(marked, "no currency marker in {price:?}");
        }
    }

    #[test]
    fn empty_and_whitespace_inputs_match_nothing(ws in "[ \t\n]{0,40}") {
        let s = scanner();
        for kind in EntityKind::ALL {
            prop_assert!(s.scan(kind, &ws).is_empty());
        }
    }
}

// Boundary delimiting for long_string comes from `\b`, which only separates
// word characters. An adjacent `.` or `-` neither joins the run past its
// boundary-eligible end nor disqualifies it; an adjacent word character
// outside the token alphabet (any non-ASCII letter) kills the boundary and
// with it the match. The original behaves identically.
#[test]
fn long_string_adjacency_covers_word_characters_only() {
    let s = scanner();
    let run = "a".repeat(20);

    // Adjacent dot or dash on either side: the run still matches.
    assert_eq!(s.find_long_strings(&format!(".{run}")), vec![run.clone()]);
    assert_eq!(s.find_long_strings(&format!("{run}.")), vec![run.clone()]);
    assert_eq!(s.find_long_strings(&format!("-{run}-")), vec![run.clone()]);

    // Adjacent word character outside the alphabet: no boundary, no match.
    assert!(s.find_long_strings(&format!("\u{e9}{run}")).is_empty());
    assert!(s.find_long_strings(&format!("{run}\u{e9}")).is_empty());
}
