//! Scan throughput benchmarks.
//!
//! ```bash
//! cargo bench --bench scan
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sleuth::{EntityKind, EntityScanner};

const SAMPLE: &str = "\
Contact: info@example.com, backup: admin@osintambition.org
Visit https://www.example.com/about or http://osintambition.org.
Twitter: @OpenAI, @cyb_detective
BTC: 1BoatSLRHtKNngkdXEeobR76b53LETtpyT
ETH: 0x742d35Cc6634C0532925a3b844Bc454e4438f44e
Listing at USD 1,200.50 or 99.99\u{20ac}
Last seen near 40.7128,-74.0060
";

fn bench_scan(c: &mut Criterion) {
    let scanner = EntityScanner::new().expect("catalog compiles");
    let long_text = SAMPLE.repeat(64);

    c.bench_function("construct_scanner", |b| {
        b.iter(|| EntityScanner::new().expect("catalog compiles"))
    });

    c.bench_function("scan_email_short", |b| {
        b.iter(|| black_box(scanner.scan(EntityKind::Email, black_box(SAMPLE))))
    });

    c.bench_function("scan_all_kinds_short", |b| {
        b.iter(|| {
            for kind in EntityKind::ALL {
                black_box(scanner.scan(kind, black_box(SAMPLE)));
            }
        })
    });

    c.bench_function("scan_all_kinds_16kb", |b| {
        b.iter(|| {
            for kind in EntityKind::ALL {
                black_box(scanner.scan(kind, black_box(long_text.as_str())));
            }
        })
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
