use std::fmt;

use crate::error::WireError;

/// Legacy magic: ESC 'L' 'J'. Byte 3 carries the sub-version.
pub const LEGACY_MAGIC: [u8; 3] = [0x1B, 0x4C, 0x4A];

/// Shortest buffer the legacy rule will look at.
pub const LEGACY_HEADER_SIZE: usize = 4;

/// Shortest buffer the current and plain rules will look at.
pub const CURRENT_HEADER_SIZE: usize = 2;

/// Offset of the legacy sub-version byte.
pub const LEGACY_VERSION_OFFSET: usize = 3;

/// Value written to the legacy sub-version byte once a file is decoded.
pub const LEGACY_PLAIN_TAG: u8 = 0x02;

/// Current-scheme lead byte selecting variant A.
pub const CURRENT_LEAD_A: u8 = 0x02;

/// Current-scheme lead byte that defers to the byte-1 marker.
pub const CURRENT_LEAD_B: u8 = 0x03;

/// Byte-1 marker selecting variant B.
pub const CURRENT_MARKER_B: u8 = 0x03;

/// Header of a script that is already plain: `01 03`.
pub const PLAIN_HEADER: [u8; 2] = [0x01, 0x03];

/// Sub-version of a legacy file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegacyVersion {
    V3,
    V4,
}

impl LegacyVersion {
    /// Map the raw byte 3 to a supported sub-version.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnsupportedVersion`] for anything but 0x03 / 0x04.
    pub fn from_wire_byte(value: u8) -> Result<Self, WireError> {
        match value {
            0x03 => Ok(Self::V3),
            0x04 => Ok(Self::V4),
            other => Err(WireError::UnsupportedVersion(other)),
        }
    }

    pub fn to_wire_byte(self) -> u8 {
        match self {
            Self::V3 => 0x03,
            Self::V4 => 0x04,
        }
    }
}

/// Sub-variant of a current-scheme file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurrentVariant {
    /// Byte 0 is 0x02.
    A,
    /// Byte 0 is 0x03 and byte 1 is 0x03.
    B,
}

/// The transform family a buffer belongs to, derived from its header.
///
/// ```text
/// ┌──────────────────┬──────────────────────────┬───────────────┐
/// │ Variant          │ Header                   │ Payload start │
/// ├──────────────────┼──────────────────────────┼───────────────┤
/// │ Legacy(V3)       │ 1B 4C 4A 03              │ 4             │
/// │ Legacy(V4)       │ 1B 4C 4A 04              │ 4             │
/// │ Current(A)       │ 02 ..                    │ 2             │
/// │ Current(B)       │ 03 03                    │ 2             │
/// │ Plain            │ 01 03                    │ (none)        │
/// └──────────────────┴──────────────────────────┴───────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    Legacy(LegacyVersion),
    Current(CurrentVariant),
    /// Already decoded; nothing to transform.
    Plain,
}

impl Scheme {
    /// Recognize the scheme of `buf` from its leading bytes.
    ///
    /// Rules are tried in priority order and the first match wins:
    ///
    /// 1. `len >= 4` and `buf[0..3] == 1B 4C 4A` selects the legacy family,
    ///    then byte 3 picks the sub-version.
    /// 2. `len >= 2` and `buf[0]` is 0x02 or 0x03 selects the current family.
    ///    0x02 is variant A; otherwise byte 1 must be 0x03 for variant B.
    /// 3. `len >= 2` and `buf[0..2] == 01 03` is already plain.
    ///
    /// # Errors
    ///
    /// - [`WireError::InvalidHeader`] if no rule matches (including any
    ///   buffer shorter than 2 bytes).
    /// - [`WireError::UnsupportedVersion`] for a legacy sub-version other
    ///   than 0x03 / 0x04.
    /// - [`WireError::InvalidFormat`] for a current lead byte whose variant
    ///   marker is missing.
    pub fn detect(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() >= LEGACY_HEADER_SIZE && buf[0..3] == LEGACY_MAGIC {
            let version = LegacyVersion::from_wire_byte(buf[LEGACY_VERSION_OFFSET])?;
            return Ok(Self::Legacy(version));
        }

        if buf.len() < CURRENT_HEADER_SIZE {
            return Err(WireError::InvalidHeader);
        }

        match buf[0] {
            CURRENT_LEAD_A => Ok(Self::Current(CurrentVariant::A)),
            CURRENT_LEAD_B if buf[1] == CURRENT_MARKER_B => Ok(Self::Current(CurrentVariant::B)),
            CURRENT_LEAD_B => Err(WireError::InvalidFormat {
                lead: buf[0],
                marker: buf[1],
            }),
            _ if buf[0..2] == PLAIN_HEADER => Ok(Self::Plain),
            _ => Err(WireError::InvalidHeader),
        }
    }

    /// First byte index the payload transform rewrites, or `None` for
    /// [`Scheme::Plain`].
    pub fn payload_start(self) -> Option<usize> {
        match self {
            Self::Legacy(_) => Some(LEGACY_HEADER_SIZE),
            Self::Current(_) => Some(CURRENT_HEADER_SIZE),
            Self::Plain => None,
        }
    }

    /// Short stable name, used in logs and `inspect` output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Legacy(LegacyVersion::V3) => "legacy-v3",
            Self::Legacy(LegacyVersion::V4) => "legacy-v4",
            Self::Current(CurrentVariant::A) => "current-a",
            Self::Current(CurrentVariant::B) => "current-b",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_legacy_versions() {
        assert_eq!(
            Scheme::detect(&[0x1B, 0x4C, 0x4A, 0x03]),
            Ok(Scheme::Legacy(LegacyVersion::V3))
        );
        assert_eq!(
            Scheme::detect(&[0x1B, 0x4C, 0x4A, 0x04, 0xAA]),
            Ok(Scheme::Legacy(LegacyVersion::V4))
        );
    }

    #[test]
    fn reject_unsupported_legacy_version() {
        assert_eq!(
            Scheme::detect(&[0x1B, 0x4C, 0x4A, 0x05, 0x00]),
            Err(WireError::UnsupportedVersion(0x05))
        );
    }

    #[test]
    fn three_byte_magic_is_not_legacy() {
        // Too short for rule 1 and 0x1B matches no other rule.
        assert_eq!(
            Scheme::detect(&[0x1B, 0x4C, 0x4A]),
            Err(WireError::InvalidHeader)
        );
    }

    #[test]
    fn detect_current_variants() {
        assert_eq!(
            Scheme::detect(&[0x02, 0x00]),
            Ok(Scheme::Current(CurrentVariant::A))
        );
        // Variant A wins even when the B marker is also present.
        assert_eq!(
            Scheme::detect(&[0x02, 0x03]),
            Ok(Scheme::Current(CurrentVariant::A))
        );
        assert_eq!(
            Scheme::detect(&[0x03, 0x03, 0x10]),
            Ok(Scheme::Current(CurrentVariant::B))
        );
    }

    #[test]
    fn reject_current_without_marker() {
        assert_eq!(
            Scheme::detect(&[0x03, 0x07]),
            Err(WireError::InvalidFormat {
                lead: 0x03,
                marker: 0x07
            })
        );
    }

    #[test]
    fn detect_plain() {
        assert_eq!(Scheme::detect(&[0x01, 0x03]), Ok(Scheme::Plain));
        assert_eq!(Scheme::detect(&[0x01, 0x03, 0x41]), Ok(Scheme::Plain));
    }

    #[test]
    fn reject_short_and_unknown() {
        assert_eq!(Scheme::detect(&[]), Err(WireError::InvalidHeader));
        assert_eq!(Scheme::detect(&[0x02]), Err(WireError::InvalidHeader));
        assert_eq!(Scheme::detect(&[0x01, 0x04]), Err(WireError::InvalidHeader));
        assert_eq!(Scheme::detect(b"--"), Err(WireError::InvalidHeader));
    }

    #[test]
    fn payload_start_per_scheme() {
        assert_eq!(Scheme::Legacy(LegacyVersion::V4).payload_start(), Some(4));
        assert_eq!(Scheme::Current(CurrentVariant::B).payload_start(), Some(2));
        assert_eq!(Scheme::Plain.payload_start(), None);
    }

    #[test]
    fn labels_display() {
        assert_eq!(Scheme::Legacy(LegacyVersion::V3).to_string(), "legacy-v3");
        assert_eq!(Scheme::Current(CurrentVariant::A).to_string(), "current-a");
        assert_eq!(Scheme::Plain.to_string(), "plain");
    }

    #[test]
    fn legacy_version_wire_byte_roundtrip() {
        for v in [LegacyVersion::V3, LegacyVersion::V4] {
            assert_eq!(LegacyVersion::from_wire_byte(v.to_wire_byte()), Ok(v));
        }
    }
}
