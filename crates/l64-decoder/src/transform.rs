//! Per-scheme payload loops.
//!
//! All arithmetic wraps at 256. The byte index is folded in as `i as u8`,
//! which is the same value as `i mod 256`, so files larger than 256 bytes
//! keep decoding exactly as a plain `(b + t + i) & 0xFF` would.

use l64_wire::header::{CURRENT_HEADER_SIZE, LEGACY_HEADER_SIZE};
use l64_wire::tables::{
    CURRENT_A, CURRENT_B, CURRENT_MASK, LEGACY_V3, LEGACY_V3_MASK, LEGACY_V4, LEGACY_V4_MASK,
};
use l64_wire::{CurrentVariant, LegacyVersion};

/// Rewrite `buf[4..]` for a legacy file. Does not touch the header.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn legacy(buf: &mut [u8], version: LegacyVersion) {
    let (table, mask): (&[u8], usize) = match version {
        LegacyVersion::V3 => (&LEGACY_V3, LEGACY_V3_MASK),
        LegacyVersion::V4 => (&LEGACY_V4, LEGACY_V4_MASK),
    };

    for (i, byte) in buf.iter_mut().enumerate().skip(LEGACY_HEADER_SIZE) {
        *byte = byte.wrapping_add(table[i & mask]).wrapping_add(i as u8);
    }
}

/// Rewrite `buf[2..]` for a current-scheme file. Does not touch the header.
///
/// Variant A adds `i - 1`, variant B adds `i`; both address their table
/// with `(i - 1) & 7`, including B's 16-entry table.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn current(buf: &mut [u8], variant: CurrentVariant) {
    match variant {
        CurrentVariant::A => {
            for (i, byte) in buf.iter_mut().enumerate().skip(CURRENT_HEADER_SIZE) {
                let k = i - 1;
                *byte = byte
                    .wrapping_add(k as u8)
                    .wrapping_add(CURRENT_A[k & CURRENT_MASK]);
            }
        }
        CurrentVariant::B => {
            for (i, byte) in buf.iter_mut().enumerate().skip(CURRENT_HEADER_SIZE) {
                *byte = byte
                    .wrapping_add(i as u8)
                    .wrapping_add(CURRENT_B[(i - 1) & CURRENT_MASK]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight transcription of the index arithmetic with `u32` math and
    /// an explicit `& 0xFF`, to cross-check the wrapping version.
    fn reference_legacy(buf: &[u8], table: &[u8], mask: usize) -> Vec<u8> {
        buf.iter()
            .enumerate()
            .map(|(i, &b)| {
                if i < 4 {
                    b
                } else {
                    ((u32::from(b) + u32::from(table[i & mask]) + i as u32) & 0xFF) as u8
                }
            })
            .collect()
    }

    #[test]
    fn legacy_matches_reference_past_256() {
        let input: Vec<u8> = (0..700u32).map(|i| (i * 37 % 251) as u8).collect();

        let mut v3 = input.clone();
        legacy(&mut v3, LegacyVersion::V3);
        assert_eq!(v3, reference_legacy(&input, &LEGACY_V3, 7));

        let mut v4 = input.clone();
        legacy(&mut v4, LegacyVersion::V4);
        assert_eq!(v4, reference_legacy(&input, &LEGACY_V4, 15));
    }

    #[test]
    fn current_leaves_first_two_bytes() {
        let mut buf = vec![0x02, 0x99, 0x00, 0x00];
        current(&mut buf, CurrentVariant::A);
        assert_eq!(&buf[..2], &[0x02, 0x99]);
        // i=2: 0 + 1 + A[1]=0x0B, i=3: 0 + 2 + A[2]=0x09
        assert_eq!(&buf[2..], &[0x0C, 0x0B]);
    }

    #[test]
    fn current_b_uses_low_half_only() {
        // i=9: (i-1)&7 = 0, so entry 0 (0x05) is used, never entry 8 (0x08).
        let mut buf = vec![0u8; 10];
        buf[0] = 0x03;
        buf[1] = 0x03;
        current(&mut buf, CurrentVariant::B);
        assert_eq!(buf[9], 9 + 0x05);
        // i=2: 2 + B[1]=0x0F
        assert_eq!(buf[2], 0x11);
    }

    #[test]
    fn empty_payload_is_noop() {
        let mut legacy_buf = vec![0x1B, 0x4C, 0x4A, 0x03];
        legacy(&mut legacy_buf, LegacyVersion::V3);
        assert_eq!(legacy_buf, vec![0x1B, 0x4C, 0x4A, 0x03]);

        let mut current_buf = vec![0x02, 0x00];
        current(&mut current_buf, CurrentVariant::A);
        assert_eq!(current_buf, vec![0x02, 0x00]);
    }
}
