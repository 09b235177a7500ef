//! Edge case tests for header recognition and the payload loops.
//!
//! - **Short buffers**: anything under 2 bytes is an invalid header, and a
//!   3-byte legacy magic without its version byte is not legacy.
//! - **Header-only buffers**: a header with no payload decodes; legacy
//!   still gets its version byte normalized.
//! - **Rule priority**: legacy beats current beats plain, and variant A
//!   beats variant B.
//! - **Untouched on failure**: every rejected buffer comes back unchanged.

use l64_decoder::{DecodeError, DecodeOutcome, L64Decoder};
use l64_wire::{CurrentVariant, LegacyVersion, Scheme};

fn decode(bytes: &[u8]) -> (Vec<u8>, Result<DecodeOutcome, DecodeError>) {
    let mut buf = bytes.to_vec();
    let result = L64Decoder::decode(&mut buf);
    (buf, result)
}

fn assert_rejected(bytes: &[u8], expected: DecodeError) {
    let (buf, result) = decode(bytes);
    assert_eq!(result, Err(expected), "input {bytes:02X?}");
    assert_eq!(buf, bytes, "buffer changed for {bytes:02X?}");
}

// ── Short buffers ─────────────────────────────────────────────────────────────

#[test]
fn empty_and_single_byte_buffers() {
    assert_rejected(&[], DecodeError::InvalidHeader);
    for b in 0..=u8::MAX {
        assert_rejected(&[b], DecodeError::InvalidHeader);
    }
}

#[test]
fn legacy_magic_without_version_byte() {
    assert_rejected(&[0x1B, 0x4C, 0x4A], DecodeError::InvalidHeader);
    assert_rejected(&[0x1B, 0x4C], DecodeError::InvalidHeader);
}

// ── Header-only buffers ───────────────────────────────────────────────────────

#[test]
fn legacy_header_only_is_normalized() {
    let (buf, result) = decode(&[0x1B, 0x4C, 0x4A, 0x04]);
    assert_eq!(
        result,
        Ok(DecodeOutcome::Decoded(Scheme::Legacy(LegacyVersion::V4)))
    );
    assert_eq!(buf, vec![0x1B, 0x4C, 0x4A, 0x02]);
}

#[test]
fn current_header_only_is_unchanged() {
    for header in [[0x02u8, 0x7F], [0x03, 0x03]] {
        let (buf, result) = decode(&header);
        assert!(result.is_ok());
        assert_eq!(buf, header);
    }
}

// ── Rule priority ─────────────────────────────────────────────────────────────

#[test]
fn legacy_wins_over_everything() {
    let (_, result) = decode(&[0x1B, 0x4C, 0x4A, 0x03, 0x01, 0x03]);
    assert_eq!(
        result,
        Ok(DecodeOutcome::Decoded(Scheme::Legacy(LegacyVersion::V3)))
    );
}

#[test]
fn unsupported_legacy_does_not_fall_through() {
    // Byte 3 = 0x02 is the plain tag, not a sub-version.
    assert_rejected(&[0x1B, 0x4C, 0x4A, 0x02, 0x00], DecodeError::UnsupportedVersion(0x02));
    assert_rejected(&[0x1B, 0x4C, 0x4A, 0xFF], DecodeError::UnsupportedVersion(0xFF));
}

#[test]
fn variant_a_wins_over_b() {
    let (_, result) = decode(&[0x02, 0x03, 0x00]);
    assert_eq!(
        result,
        Ok(DecodeOutcome::Decoded(Scheme::Current(CurrentVariant::A)))
    );
}

#[test]
fn current_lead_without_marker() {
    for marker in (0..=u8::MAX).filter(|&m| m != 0x03) {
        assert_rejected(
            &[0x03, marker, 0x00],
            DecodeError::InvalidFormat { lead: 0x03, marker },
        );
    }
}

#[test]
fn plain_needs_exact_pair() {
    assert_eq!(decode(&[0x01, 0x03]).1, Ok(DecodeOutcome::AlreadyDecoded));
    assert_rejected(&[0x01, 0x02], DecodeError::InvalidHeader);
    assert_rejected(&[0x00, 0x03], DecodeError::InvalidHeader);
}

#[test]
fn text_files_are_invalid_header() {
    assert_rejected(b"print('already lua')", DecodeError::InvalidHeader);
    assert_rejected(b"\xEF\xBB\xBF-- bom", DecodeError::InvalidHeader);
}

// ── Large buffers ─────────────────────────────────────────────────────────────

#[test]
fn large_buffer_decodes_every_byte() {
    let mut input = vec![0x03u8, 0x03];
    input.resize((1 << 16) + 16, 0);

    let (buf, result) = decode(&input);

    assert!(result.is_ok());
    assert_eq!(buf.len(), input.len());
    // Indices 258 and 0x10002 wrap to 2, and (i - 1) & 7 is 1 for all three.
    assert_eq!(buf[2], 0x11);
    assert_eq!(buf[258], 0x11);
    assert_eq!(buf[0x1_0002], 0x11);
}
