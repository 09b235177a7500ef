//! Fixture helpers for the L64 test suite.
//!
//! There is no reference encoder for `.l64` files, so the tests build their
//! inputs with [`obfuscate`]: the decoder's index arithmetic with wrapping
//! subtraction in place of addition. Decoding its output must give back the
//! plaintext exactly.
//!
//! ```text
//! plain ──▶ obfuscate(scheme) ──▶ encoded ──▶ L64Decoder::decode ──▶ plain
//! ```

#![warn(clippy::pedantic)]

use std::path::{Path, PathBuf};

use l64_wire::header::{
    CURRENT_HEADER_SIZE, LEGACY_HEADER_SIZE, LEGACY_MAGIC, LEGACY_PLAIN_TAG, LEGACY_VERSION_OFFSET,
    PLAIN_HEADER,
};
use l64_wire::tables::{
    CURRENT_A, CURRENT_B, CURRENT_MASK, LEGACY_V3, LEGACY_V3_MASK, LEGACY_V4, LEGACY_V4_MASK,
};
use l64_wire::{CurrentVariant, LegacyVersion, Scheme};

/// Every scheme the decoder can produce plaintext from.
pub const ALL_SCHEMES: [Scheme; 5] = [
    Scheme::Legacy(LegacyVersion::V3),
    Scheme::Legacy(LegacyVersion::V4),
    Scheme::Current(CurrentVariant::A),
    Scheme::Current(CurrentVariant::B),
    Scheme::Plain,
];

/// Header a decoded file of `scheme` starts with.
///
/// Legacy files end up with the plain tag in byte 3. Current files keep
/// their header; variant A's second byte is arbitrary and fixed at 0x00
/// here.
pub fn decoded_header(scheme: Scheme) -> Vec<u8> {
    match scheme {
        Scheme::Legacy(_) => {
            let mut header = LEGACY_MAGIC.to_vec();
            header.push(LEGACY_PLAIN_TAG);
            header
        }
        Scheme::Current(CurrentVariant::A) => vec![0x02, 0x00],
        Scheme::Current(CurrentVariant::B) => vec![0x03, 0x03],
        Scheme::Plain => PLAIN_HEADER.to_vec(),
    }
}

/// Decoded header of `scheme` followed by `body`.
pub fn plaintext(scheme: Scheme, body: &[u8]) -> Vec<u8> {
    let mut buf = decoded_header(scheme);
    buf.extend_from_slice(body);
    buf
}

/// Inverse of the decoder for `scheme`, applied to a full decoded buffer.
///
/// Legacy buffers get their sub-version written back into byte 3. Plain
/// buffers come back unchanged.
///
/// # Panics
///
/// Panics if `plain` is shorter than the scheme's header.
#[allow(clippy::cast_possible_truncation)]
pub fn obfuscate(plain: &[u8], scheme: Scheme) -> Vec<u8> {
    let mut buf = plain.to_vec();

    match scheme {
        Scheme::Legacy(version) => {
            assert!(buf.len() >= LEGACY_HEADER_SIZE, "legacy buffer too short");
            let (table, mask): (&[u8], usize) = match version {
                LegacyVersion::V3 => (&LEGACY_V3, LEGACY_V3_MASK),
                LegacyVersion::V4 => (&LEGACY_V4, LEGACY_V4_MASK),
            };
            buf[LEGACY_VERSION_OFFSET] = version.to_wire_byte();
            for (i, byte) in buf.iter_mut().enumerate().skip(LEGACY_HEADER_SIZE) {
                *byte = byte.wrapping_sub(table[i & mask]).wrapping_sub(i as u8);
            }
        }
        Scheme::Current(variant) => {
            assert!(buf.len() >= CURRENT_HEADER_SIZE, "current buffer too short");
            for (i, byte) in buf.iter_mut().enumerate().skip(CURRENT_HEADER_SIZE) {
                let k = i - 1;
                *byte = match variant {
                    CurrentVariant::A => byte
                        .wrapping_sub(k as u8)
                        .wrapping_sub(CURRENT_A[k & CURRENT_MASK]),
                    CurrentVariant::B => byte
                        .wrapping_sub(i as u8)
                        .wrapping_sub(CURRENT_B[k & CURRENT_MASK]),
                };
            }
        }
        Scheme::Plain => {}
    }

    buf
}

/// Directory name of a golden fixture, e.g. `legacy_v4_long`.
pub fn fixture_name(scheme: Scheme, size: &str) -> String {
    format!("{}_{size}", scheme.label().replace('-', "_"))
}

/// Root of the committed golden fixtures.
pub fn golden_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Plaintext body shared by the `short` fixtures.
pub const SHORT_BODY: &[u8] = b"-- main.lua\nprint(\"hello\")\n";

/// Plaintext body shared by the `long` fixtures. Long enough that byte
/// indices wrap past 256 twice.
pub fn long_body() -> Vec<u8> {
    (0..8)
        .map(|i| {
            format!("function onUpdate{i}(self, dt)\n    self.speed = self.speed + dt * {i}\nend\n\n")
        })
        .collect::<String>()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obfuscate_plain_is_identity() {
        let plain = plaintext(Scheme::Plain, b"return 1");
        assert_eq!(obfuscate(&plain, Scheme::Plain), plain);
    }

    #[test]
    fn obfuscate_legacy_restores_version_byte() {
        let plain = plaintext(Scheme::Legacy(LegacyVersion::V4), b"");
        assert_eq!(
            obfuscate(&plain, Scheme::Legacy(LegacyVersion::V4)),
            vec![0x1B, 0x4C, 0x4A, 0x04]
        );
    }

    #[test]
    fn fixture_names() {
        assert_eq!(
            fixture_name(Scheme::Legacy(LegacyVersion::V3), "short"),
            "legacy_v3_short"
        );
        assert_eq!(
            fixture_name(Scheme::Current(CurrentVariant::B), "long"),
            "current_b_long"
        );
    }

    #[test]
    fn long_body_wraps_indices() {
        assert!(long_body().len() > 512);
    }
}
