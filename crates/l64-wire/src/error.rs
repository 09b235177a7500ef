/// Errors raised while recognizing an `.l64` header.
///
/// Recognition only ever reads the first few bytes, so none of these
/// variants imply that the buffer was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Buffer shorter than any header, or leading bytes match no known pattern.
    #[error("invalid .l64 header")]
    InvalidHeader,

    /// Legacy magic present, but the sub-version byte is not 0x03 or 0x04.
    #[error("unsupported legacy version {0:#04X}")]
    UnsupportedVersion(u8),

    /// Current-scheme lead byte present, but neither variant marker holds.
    #[error("invalid current-scheme format: lead={lead:#04X} marker={marker:#04X}")]
    InvalidFormat { lead: u8, marker: u8 },
}

// The {0:#04X} syntax prints a byte as 0x05: `#` adds the prefix and the
// width of 4 counts it, so single-digit values are zero padded.
