//! File discovery with directory-path exclusion.
//!
//! Exclusions are plain substrings tested against the path of the directory
//! that contains each file. There is no segment awareness: `build` also
//! excludes `rebuild/` and `my-builds/`, and because the walked path keeps
//! the root exactly as the caller spelled it, an exclusion that appears in the
//! root itself excludes every file. Directories are still descended into;
//! the test happens when a file is about to be yielded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::ExtlocError;
use crate::Result;

/// Directory substrings excluded unless the caller opts out.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "node_modules",
    "build",
    "dist",
    "venv",
    ".git",
    ".idea",
    ".vscode",
    "__pycache__",
];

/// Set of directory-path substrings that disqualify a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    patterns: Vec<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExclusionSet {
    /// Create the default exclusion set (build and dependency directories).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with no exclusions at all.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Add an exclusion substring.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(ExtlocError::InvalidExclusion {
                pattern: pattern.to_string(),
                message: "empty substring matches every directory".to_string(),
            });
        }
        if !self.patterns.iter().any(|p| p == pattern) {
            self.patterns.push(pattern.to_string());
        }
        Ok(self)
    }

    /// Add multiple exclusion substrings.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// The exclusion substrings, in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether a directory path contains any exclusion substring.
    pub fn excludes_dir(&self, dir: &Path) -> bool {
        let dir = dir.to_string_lossy();
        self.patterns.iter().any(|p| dir.contains(p.as_str()))
    }

    /// Check whether a file is excluded, judged by its containing directory.
    pub fn excludes(&self, file: &Path) -> bool {
        file.parent().is_some_and(|dir| self.excludes_dir(dir))
    }
}

/// Lazy iterator over the files of a single traversal.
///
/// Created by [`discover_files`]. Entries inside a directory are visited in
/// file-name order, so two traversals of an unchanged tree yield the same
/// sequence.
pub struct SourceFiles {
    walker: walkdir::IntoIter,
    exclusions: ExclusionSet,
}

impl std::fmt::Debug for SourceFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFiles")
            .field("exclusions", &self.exclusions)
            .finish_non_exhaustive()
    }
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if is_directory(&entry) {
                continue;
            }

            let path = entry.into_path();
            if self.exclusions.excludes(&path) {
                debug!(path = %path.display(), "skipping file under excluded directory");
                continue;
            }

            return Some(path);
        }
    }
}

/// Directories, including symlinks that resolve to one, are never yielded.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Discover the files under `root` that are not excluded.
///
/// Walks the tree lazily without following symlinks. The root must be a
/// directory: a missing root is [`ExtlocError::PathNotFound`] and any other
/// root is [`ExtlocError::NotADirectory`].
pub fn discover_files(root: impl AsRef<Path>, exclusions: &ExclusionSet) -> Result<SourceFiles> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(ExtlocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ExtlocError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    Ok(SourceFiles {
        walker,
        exclusions: exclusions.clone(),
    })
}
