//! Additive lookup tables for every supported scheme.
//!
//! Each table is added (mod 256) to payload bytes alongside the byte's own
//! index. The decoder is the only consumer; the masks that address them
//! live next to the tables so the pairing cannot drift.

/// Legacy sub-version 0x03. Addressed with `i & LEGACY_V3_MASK`.
pub const LEGACY_V3: [u8; 8] = [0x14, 0x0B, 0x09, 0x02, 0x08, 0x03, 0x03, 0x03];

/// Legacy sub-version 0x04. Addressed with `i & LEGACY_V4_MASK`.
pub const LEGACY_V4: [u8; 16] = [
    0x06, 0x10, 0x0C, 0x02, 0x09, 0x03, 0x04, 0x04, 0x09, 0x05, 0x04, 0x02, 0x05, 0x08, 0x09, 0x15,
];

/// Current scheme, variant A. Addressed with `(i - 1) & CURRENT_MASK`.
pub const CURRENT_A: [u8; 8] = [0x14, 0x0B, 0x09, 0x02, 0x08, 0x03, 0x03, 0x03];

/// Current scheme, variant B. Addressed with `(i - 1) & CURRENT_MASK`.
///
/// Only entries 0..8 are reachable. Files in the wild were produced with
/// the 3-bit mask, so the upper half must stay unused.
pub const CURRENT_B: [u8; 16] = [
    0x05, 0x0F, 0x0B, 0x01, 0x08, 0x02, 0x03, 0x03, 0x08, 0x04, 0x03, 0x01, 0x04, 0x07, 0x08, 0x14,
];

pub const LEGACY_V3_MASK: usize = 0x07;
pub const LEGACY_V4_MASK: usize = 0x0F;
pub const CURRENT_MASK: usize = 0x07;
