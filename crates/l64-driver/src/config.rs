/// What to do when the destination file already exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Refuse to touch an existing file (create-new semantics).
    #[default]
    Fail,
    /// Truncate and rewrite an existing file.
    Replace,
}

/// Configuration for the filesystem driver.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────────┐
/// │ Field            │ Purpose                                          │
/// ├──────────────────┼──────────────────────────────────────────────────┤
/// │ overwrite        │ Fail on existing destinations, or replace them   │
/// │ recursive        │ Descend into subfolders in folder mode           │
/// │ source_extension │ Only files ending in `.<ext>` are picked up      │
/// │ target_extension │ Extension given to files written into a folder   │
/// └──────────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub overwrite: OverwritePolicy,
    pub recursive: bool,
    /// Without the leading dot.
    pub source_extension: String,
    /// Without the leading dot.
    pub target_extension: String,
}

impl Default for DriverConfig {
    /// Flat traversal, never overwrite, `.l64` in and `.lua` out.
    fn default() -> Self {
        Self {
            overwrite: OverwritePolicy::Fail,
            recursive: false,
            source_extension: "l64".to_string(),
            target_extension: "lua".to_string(),
        }
    }
}

impl DriverConfig {
    /// Whether a directory entry name should be decoded in folder mode.
    pub fn matches_source(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.source_extension.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    }
}
