#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: Scheme::detect with arbitrary bytes.
//
// Catches bugs in:
// - Short buffer handling (0 to 3 bytes)
// - Rule priority between legacy, current, and plain headers
// - Sub-version and variant marker checks
fuzz_target!(|data: &[u8]| {
    let _ = l64_wire::Scheme::detect(data);
});
