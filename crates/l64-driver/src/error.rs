use std::path::PathBuf;

use l64_decoder::DecodeError;

/// Errors raised while reading, decoding, or writing files.
///
/// Filesystem failures are kept apart from [`DecodeError`]; the latter is
/// only ever wrapped, together with the path it happened on.
///
/// ```text
/// ┌───────────────────┬──────────────────────────────────────────────┐
/// │ Variant           │ Cause                                        │
/// ├───────────────────┼──────────────────────────────────────────────┤
/// │ NotFound          │ Input file does not exist                    │
/// │ Read              │ Input exists but could not be read           │
/// │ Decode            │ Engine rejected the buffer                   │
/// │ DestinationExists │ Output exists and overwrite is off           │
/// │ Write             │ Output could not be opened or written        │
/// │ CreateDir         │ Output folder could not be created           │
/// │ ReadDir           │ Input folder could not be listed             │
/// └───────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("file {path:?} not found")]
    NotFound { path: PathBuf },

    #[error("failed to read file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("the file {path:?} already exists; pass --overwrite to replace it")]
    DestinationExists { path: PathBuf },

    #[error("could not open file {path:?} for writing")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create folder {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not list folder {path:?}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DriverError {
    /// The engine error, when this failure came from decoding.
    pub fn decode_error(&self) -> Option<DecodeError> {
        match self {
            Self::Decode { source, .. } => Some(*source),
            _ => None,
        }
    }
}
