//! Core data structures for line statistics.
//!
//! Counting produces one [`FileCount`] per file. Those are folded into a
//! [`ProjectSummary`], which keeps running totals plus an
//! [`ExtensionStats`] bucket per extension key.
//!
//! The totals are always the sums of the buckets: every file lands in
//! exactly one bucket and contributes the same counts to both.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::AddAssign;
use std::path::Path;

/// Line counts for a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    /// Total number of lines
    pub lines: u64,
    /// Lines with non-whitespace content
    pub lines_code: u64,
}

impl FileCount {
    /// Create a new FileCount with all zeros.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Accumulated counts for one extension key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionStats {
    /// Number of files with this extension
    pub files: u64,
    /// Total lines across those files
    pub lines: u64,
    /// Non-blank lines across those files
    pub lines_code: u64,
}

impl ExtensionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more file with the given counts.
    pub fn add_file(&mut self, count: FileCount) {
        self.files += 1;
        self.lines += count.lines;
        self.lines_code += count.lines_code;
    }
}

impl AddAssign for ExtensionStats {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.lines += other.lines;
        self.lines_code += other.lines_code;
    }
}

/// Derive the extension key for a path.
///
/// The key is everything after the last `.` of the file name. A file name
/// without a `.` is its own key, so `Makefile` maps to `"Makefile"` and
/// `.bashrc` maps to `"bashrc"`.
pub fn extension_key(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    };
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => name.into_owned(),
    }
}

/// Project-wide line statistics, keyed by extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Number of files counted
    pub total_files: u64,
    /// Total lines across all files
    pub total_lines: u64,
    /// Non-blank lines across all files
    pub total_lines_code: u64,
    /// Per-extension buckets
    pub file_types: BTreeMap<String, ExtensionStats>,
}

impl ProjectSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file into the summary.
    pub fn add_file(&mut self, path: &Path, count: FileCount) {
        self.total_files += 1;
        self.total_lines += count.lines;
        self.total_lines_code += count.lines_code;

        self.file_types
            .entry(extension_key(path))
            .or_default()
            .add_file(count);
    }

    /// Stats for one extension key, if any file had it.
    pub fn extension(&self, key: &str) -> Option<&ExtensionStats> {
        self.file_types.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.total_files == 0
    }
}

impl<P: AsRef<Path>> Extend<(P, FileCount)> for ProjectSummary {
    fn extend<I: IntoIterator<Item = (P, FileCount)>>(&mut self, iter: I) {
        for (path, count) in iter {
            self.add_file(path.as_ref(), count);
        }
    }
}

impl<P: AsRef<Path>> FromIterator<(P, FileCount)> for ProjectSummary {
    fn from_iter<I: IntoIterator<Item = (P, FileCount)>>(iter: I) -> Self {
        let mut summary = Self::new();
        summary.extend(iter);
        summary
    }
}
