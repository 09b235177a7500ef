use l64_wire::WireError;

/// Errors that can occur while decoding an `.l64` buffer.
///
/// Every variant is raised during header recognition, before the payload
/// loop starts. A buffer handed back with one of these errors is therefore
/// byte-for-byte identical to the one passed in.
///
/// ```text
///   DecodeError
///   ├── InvalidHeader          ← too short, or no known leading bytes
///   ├── UnsupportedVersion(v)  ← legacy magic with sub-version v ∉ {3, 4}
///   └── InvalidFormat          ← current lead byte, no variant marker
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer is shorter than 2 bytes or starts with bytes that match
    /// none of the recognized schemes.
    #[error("invalid .l64 header")]
    InvalidHeader,

    /// The legacy magic was found but the file was encoded with a
    /// sub-version this decoder has no table for.
    #[error("file is encoded using version {0} which is not supported")]
    UnsupportedVersion(u8),

    /// The current-scheme lead byte was found but neither variant condition
    /// holds.
    #[error("not in a valid format (lead byte {lead:#04X}, marker {marker:#04X})")]
    InvalidFormat { lead: u8, marker: u8 },
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::InvalidHeader => Self::InvalidHeader,
            WireError::UnsupportedVersion(v) => Self::UnsupportedVersion(v),
            WireError::InvalidFormat { lead, marker } => Self::InvalidFormat { lead, marker },
        }
    }
}
