//! Golden fixture generator for the L64 conformance suite.
//!
//! Writes `tests/golden/<fixture>/script.l64` (encoded) and `script.lua`
//! (expected plaintext) for every scheme, in a short and a long flavour.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p l64-tests
//! ```
//!
//! | Fixture            | Contents                                        |
//! |--------------------|-------------------------------------------------|
//! | `<scheme>_short`   | One-line script, payload shorter than 32 bytes  |
//! | `<scheme>_long`    | 568-byte script, indices wrap past 256          |

#![allow(clippy::pedantic)]

use std::fs;
use std::path::Path;

use l64_tests::{ALL_SCHEMES, SHORT_BODY, fixture_name, golden_dir, long_body, obfuscate, plaintext};
use l64_wire::Scheme;

fn main() {
    let golden = golden_dir();
    let long = long_body();

    for scheme in ALL_SCHEMES {
        write_fixture(&golden, scheme, "short", SHORT_BODY);
        write_fixture(&golden, scheme, "long", &long);
    }

    println!("All golden fixtures written to {}", golden.display());
}

fn write_fixture(golden: &Path, scheme: Scheme, size: &str, body: &[u8]) {
    let dir = golden.join(fixture_name(scheme, size));
    fs::create_dir_all(&dir)
        .unwrap_or_else(|e| panic!("cannot create {}: {e}", dir.display()));

    let plain = plaintext(scheme, body);
    let encoded = obfuscate(&plain, scheme);

    fs::write(dir.join("script.l64"), &encoded).expect("write script.l64");
    fs::write(dir.join("script.lua"), &plain).expect("write script.lua");

    println!(
        "  {:<18} {:>4} bytes  {}",
        fixture_name(scheme, size),
        encoded.len(),
        hex::encode(&encoded[..encoded.len().min(8)])
    );
}
