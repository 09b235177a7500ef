#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use l64_decoder::L64Decoder;
use l64_tests::{ALL_SCHEMES, obfuscate, plaintext};

#[derive(Debug, Arbitrary)]
struct Input {
    scheme: u8,
    body: Vec<u8>,
}

// Fuzz target: obfuscate -> decode roundtrip.
//
// Picks a scheme from the first input byte, builds a plaintext buffer for
// it, obfuscates it, decodes it, and asserts the plaintext comes back.
fuzz_target!(|input: Input| {
    let scheme = ALL_SCHEMES[usize::from(input.scheme) % ALL_SCHEMES.len()];
    let plain = plaintext(scheme, &input.body);
    let mut buf = obfuscate(&plain, scheme);

    let outcome = L64Decoder::decode(&mut buf).unwrap();
    assert_eq!(outcome.scheme(), scheme);
    assert_eq!(buf, plain);
});
