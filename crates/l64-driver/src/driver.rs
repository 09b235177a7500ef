use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use l64_decoder::{DecodeError, DecodeOutcome, L64Decoder, Scheme};

use crate::config::{DriverConfig, OverwritePolicy};
use crate::error::DriverError;
use crate::report::{FileFailure, FileReport, FolderReport};

/// Header facts about one file, gathered without writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInspection {
    pub path: PathBuf,
    pub size: usize,
    /// Recognized scheme, or the reason recognition failed.
    pub scheme: Result<Scheme, DecodeError>,
}

/// Filesystem driver around [`L64Decoder`].
///
/// The decoder only ever sees one in-memory buffer. Everything else lives
/// here: reading the source, naming and writing the destination, honoring
/// the overwrite policy, and walking folders.
///
/// ```text
/// source.l64 ──▶ fs::read ──▶ L64Decoder::decode ──▶ destination.lua
///                                   │
///                            DecodeError ──▶ DriverError::Decode
/// ```
pub struct FsDriver {
    config: DriverConfig,
}

impl FsDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Decode a single file.
    ///
    /// When `dest` is an existing directory the output goes to
    /// `dest/<source stem>.<target extension>`; otherwise `dest` is the
    /// output file itself. An already plain file is written through
    /// unchanged. Nothing is written when decoding fails.
    ///
    /// # Errors
    ///
    /// - [`DriverError::NotFound`] / [`DriverError::Read`] for the source.
    /// - [`DriverError::Decode`] if the engine rejects the buffer.
    /// - [`DriverError::DestinationExists`] if the output exists and the
    ///   overwrite policy is [`OverwritePolicy::Fail`].
    /// - [`DriverError::Write`] if the output cannot be written.
    pub fn decode_file(&self, source: &Path, dest: &Path) -> Result<FileReport, DriverError> {
        tracing::debug!(source = %source.display(), "processing");

        let mut buf = read_source(source)?;

        let outcome = L64Decoder::decode(&mut buf).map_err(|err| DriverError::Decode {
            path: source.to_path_buf(),
            source: err,
        })?;

        match outcome {
            DecodeOutcome::Decoded(scheme) => {
                tracing::debug!(source = %source.display(), %scheme, "decoded");
            }
            DecodeOutcome::AlreadyDecoded => {
                tracing::info!(source = %source.display(), "already unlocked");
            }
        }

        let destination = self.destination_for(source, dest);
        self.write_destination(&destination, &buf)?;

        Ok(FileReport {
            source: source.to_path_buf(),
            destination,
            outcome,
            size: buf.len(),
        })
    }

    /// Decode every matching file under `source` into the mirrored tree
    /// under `dest`.
    ///
    /// Destination folders are created as needed. Per-file failures are
    /// logged and collected in the report; the run carries on with the
    /// next entry. Subfolders are only entered when the config says so.
    ///
    /// # Errors
    ///
    /// Only failures on the top folder itself are returned:
    /// [`DriverError::CreateDir`] for `dest` and [`DriverError::ReadDir`]
    /// for `source`.
    pub fn decode_folder(&self, source: &Path, dest: &Path) -> Result<FolderReport, DriverError> {
        let report = self.walk(source, dest)?;

        tracing::info!(
            decoded = report.decoded_count(),
            already_decoded = report.already_decoded_count(),
            failed = report.failed_count(),
            "folder done"
        );

        Ok(report)
    }

    /// Read `path` and recognize its scheme without decoding.
    ///
    /// # Errors
    ///
    /// [`DriverError::NotFound`] / [`DriverError::Read`] if the file cannot
    /// be read. Header problems are reported inside the inspection.
    pub fn inspect_file(&self, path: &Path) -> Result<FileInspection, DriverError> {
        let buf = read_source(path)?;
        Ok(FileInspection {
            path: path.to_path_buf(),
            size: buf.len(),
            scheme: L64Decoder::inspect(&buf),
        })
    }

    /// Output path for `source` given the user's `dest` argument.
    pub fn destination_for(&self, source: &Path, dest: &Path) -> PathBuf {
        if dest.is_dir() {
            // `file_stem` strips only the last extension; keep every other dot.
            let mut name = source.file_stem().unwrap_or(source.as_os_str()).to_os_string();
            name.push(".");
            name.push(&self.config.target_extension);
            dest.join(name)
        } else {
            dest.to_path_buf()
        }
    }

    fn walk(&self, source_dir: &Path, dest_dir: &Path) -> Result<FolderReport, DriverError> {
        let mut entries: Vec<fs::DirEntry> = fs::read_dir(source_dir)
            .and_then(|dir| dir.collect::<io::Result<Vec<_>>>())
            .map_err(|source| DriverError::ReadDir {
                path: source_dir.to_path_buf(),
                source,
            })?;
        entries.sort_by_key(fs::DirEntry::file_name);

        fs::create_dir_all(dest_dir).map_err(|source| DriverError::CreateDir {
            path: dest_dir.to_path_buf(),
            source,
        })?;

        let mut report = FolderReport::default();

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name();

            if self.config.matches_source(&name.to_string_lossy()) {
                match self.decode_file(&path, dest_dir) {
                    Ok(file) => report.files.push(file),
                    Err(error) => {
                        tracing::warn!(source = %path.display(), "{error}");
                        report.failures.push(FileFailure {
                            source: path,
                            error,
                        });
                    }
                }
            } else if self.config.recursive && entry.file_type().is_ok_and(|t| t.is_dir()) {
                match self.walk(&path, &dest_dir.join(&name)) {
                    Ok(sub) => report.merge(sub),
                    Err(error) => {
                        tracing::warn!(folder = %path.display(), "{error}");
                        report.failures.push(FileFailure {
                            source: path,
                            error,
                        });
                    }
                }
            }
        }

        Ok(report)
    }

    fn write_destination(&self, path: &Path, bytes: &[u8]) -> Result<(), DriverError> {
        let mut options = OpenOptions::new();
        options.write(true);
        match self.config.overwrite {
            OverwritePolicy::Fail => options.create_new(true),
            OverwritePolicy::Replace => options.create(true).truncate(true),
        };

        let mut file = options.open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                DriverError::DestinationExists {
                    path: path.to_path_buf(),
                }
            } else {
                DriverError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        file.write_all(bytes).map_err(|source| DriverError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for FsDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>, DriverError> {
    fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DriverError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DriverError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_for_plain_path_is_used_verbatim() {
        let driver = FsDriver::default();
        let dest = Path::new("/definitely/not/a/dir/out.txt");
        assert_eq!(
            driver.destination_for(Path::new("scripts/main.l64"), dest),
            PathBuf::from("/definitely/not/a/dir/out.txt")
        );
    }

    #[test]
    fn destination_for_directory_swaps_extension() {
        let dir = tempfile::tempdir().unwrap();
        let driver = FsDriver::default();
        assert_eq!(
            driver.destination_for(Path::new("scripts/a.b.l64"), dir.path()),
            dir.path().join("a.b.lua")
        );
    }

    #[test]
    fn custom_target_extension() {
        let dir = tempfile::tempdir().unwrap();
        let driver = FsDriver::new(DriverConfig {
            target_extension: "txt".to_string(),
            ..DriverConfig::default()
        });
        assert_eq!(
            driver.destination_for(Path::new("main.l64"), dir.path()),
            dir.path().join("main.txt")
        );
    }
}
