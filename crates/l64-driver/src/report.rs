use std::path::PathBuf;

use l64_decoder::DecodeOutcome;

use crate::error::DriverError;

/// One file that was decoded (or found already plain) and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub outcome: DecodeOutcome,
    /// Bytes written to `destination`.
    pub size: usize,
}

/// One file that was skipped because of an error.
#[derive(Debug)]
pub struct FileFailure {
    pub source: PathBuf,
    pub error: DriverError,
}

/// Result of a folder run. Failures do not stop the run, they are
/// collected here next to the successes.
#[derive(Debug, Default)]
pub struct FolderReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl FolderReport {
    /// Files whose payload was rewritten.
    pub fn decoded_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, DecodeOutcome::Decoded(_)))
            .count()
    }

    /// Files copied through unchanged because they were already plain.
    pub fn already_decoded_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == DecodeOutcome::AlreadyDecoded)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn merge(&mut self, other: FolderReport) {
        self.files.extend(other.files);
        self.failures.extend(other.failures);
    }
}
