use l64_wire::Scheme;
use l64_wire::header::{LEGACY_PLAIN_TAG, LEGACY_VERSION_OFFSET};

use crate::error::DecodeError;
use crate::transform;

/// Successful result of [`L64Decoder::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The payload was rewritten using the given scheme.
    Decoded(Scheme),
    /// The header already reads `01 03`; the buffer was left untouched.
    AlreadyDecoded,
}

impl DecodeOutcome {
    /// The scheme that was recognized, [`Scheme::Plain`] for a no-op.
    pub fn scheme(self) -> Scheme {
        match self {
            Self::Decoded(scheme) => scheme,
            Self::AlreadyDecoded => Scheme::Plain,
        }
    }
}

/// In-place `.l64` decoder.
///
/// Decoding is a two-step affair:
///
///   1. **Header**: [`Scheme::detect`] reads the first 2 to 4 bytes and
///      picks the transform, or fails. Nothing is written in this step.
///   2. **Payload**: every byte from the scheme's payload start to the end
///      of the buffer gets its table entry and its index added (mod 256).
///      Legacy files then have byte 3 rewritten to `0x02`.
///
/// The decoder holds no state; the tables are constants, so any number of
/// buffers may be decoded concurrently.
///
/// # Example
///
/// ```rust
/// use l64_decoder::{DecodeOutcome, L64Decoder, LegacyVersion, Scheme};
///
/// let mut buf = vec![0x1B, 0x4C, 0x4A, 0x03, 0x00];
/// let outcome = L64Decoder::decode(&mut buf).unwrap();
///
/// assert_eq!(outcome, DecodeOutcome::Decoded(Scheme::Legacy(LegacyVersion::V3)));
/// assert_eq!(buf, vec![0x1B, 0x4C, 0x4A, 0x02, 0x0C]);
/// ```
pub struct L64Decoder;

impl L64Decoder {
    /// Decode `buf` in place.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidHeader`] if `buf` is shorter than 2 bytes or
    ///   its header matches no known scheme.
    /// - [`DecodeError::UnsupportedVersion`] for a legacy sub-version other
    ///   than 0x03 / 0x04.
    /// - [`DecodeError::InvalidFormat`] if the current-scheme lead byte is
    ///   present without a variant marker.
    ///
    /// On error `buf` is unchanged.
    pub fn decode(buf: &mut [u8]) -> Result<DecodeOutcome, DecodeError> {
        let scheme = Scheme::detect(buf)?;

        match scheme {
            Scheme::Legacy(version) => {
                transform::legacy(buf, version);
                buf[LEGACY_VERSION_OFFSET] = LEGACY_PLAIN_TAG;
            }
            Scheme::Current(variant) => transform::current(buf, variant),
            Scheme::Plain => return Ok(DecodeOutcome::AlreadyDecoded),
        }

        Ok(DecodeOutcome::Decoded(scheme))
    }

    /// Recognize the scheme of `buf` without modifying it.
    ///
    /// # Errors
    ///
    /// Same classification as [`decode`](Self::decode).
    pub fn inspect(buf: &[u8]) -> Result<Scheme, DecodeError> {
        Ok(Scheme::detect(buf)?)
    }

    /// Decode a copy of `bytes`, leaving the input alone.
    ///
    /// # Errors
    ///
    /// Same classification as [`decode`](Self::decode).
    pub fn decode_to_vec(bytes: &[u8]) -> Result<(Vec<u8>, DecodeOutcome), DecodeError> {
        let mut buf = bytes.to_vec();
        let outcome = Self::decode(&mut buf)?;
        Ok((buf, outcome))
    }
}
