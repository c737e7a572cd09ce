//! sleuth - OSINT entity extraction demo
//!
//! Scans a sample text for every supported entity kind and prints what it
//! finds. Illustrative only; the real surface is the library API.
//!
//! Run with:
//!   cargo run --bin sleuth
//!
//! Set `RUST_LOG=debug` to see grammar compilation and scan logging.

use sleuth::{EntityKind, EntityScanner, Matches};

const SAMPLE_TEXT: &str = "\
Contact: info@example.com, backup: admin@osintambition.org
Visit https://www.example.com/about or http://osintambition.org.
Twitter: @OpenAI, @cyb_detective
BTC: 1BoatSLRHtKNngkdXEeobR76b53LETtpyT
ETH: 0x742d35Cc6634C0532925a3b844Bc454e4438f44e
Listing at USD 1,200.50 or 99.99\u{20ac}
Last seen near 40.7128,-74.0060
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scanner = EntityScanner::new()?;

    println!("=== sleuth entity scan ===\n");
    println!("{SAMPLE_TEXT}");

    for kind in EntityKind::ALL {
        match scanner.scan(kind, SAMPLE_TEXT) {
            Matches::Strings(found) if !found.is_empty() => {
                println!("{kind}:");
                for m in found {
                    println!("  {m}");
                }
            }
            Matches::Pairs(found) if !found.is_empty() => {
                println!("{kind}:");
                for (lat, lon) in found {
                    println!("  ({lat}, {lon})");
                }
            }
            _ => {}
        }
    }

    Ok(())
}
