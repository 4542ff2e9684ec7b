//! High-level counting API.
//!
//! This module wires the pipeline together: files from
//! [`discover_files`](crate::source::discover_files) are counted one at a time
//! and folded into a [`ProjectSummary`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::source::filter::{discover_files, ExclusionSet};
use crate::Result;

use super::reader::count_file;
use super::stats::{FileCount, ProjectSummary};

/// Options for counting a project.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Directory substrings whose files are skipped
    pub exclusions: ExclusionSet,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exclusion set.
    pub fn exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }
}

/// Result of counting a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CountResult {
    /// Root path that was counted
    pub root: PathBuf,
    /// Aggregated statistics
    pub summary: ProjectSummary,
    /// Files that could not be decoded as text, in discovery order
    pub undecodable: Vec<PathBuf>,
}

/// Count every non-excluded file under `path`.
///
/// Files that are not valid UTF-8 still count as files, contribute zero
/// lines, and are listed in [`CountResult::undecodable`]. Any other read
/// failure aborts the count.
///
/// # Example
///
/// ```rust
/// use extloclib::{count_project, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.py"), "x\n\ny\n").unwrap();
/// fs::write(dir.path().join("b.md"), "hello\n").unwrap();
///
/// let result = count_project(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(result.summary.total_files, 2);
/// assert_eq!(result.summary.total_lines, 4);
/// assert_eq!(result.summary.total_lines_code, 3);
/// ```
pub fn count_project(path: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let mut undecodable = Vec::new();
    let mut result = count_project_with(path, options, |file| {
        undecodable.push(file.to_path_buf());
    })?;
    result.undecodable = undecodable;
    Ok(result)
}

/// Count a project, reporting undecodable files as they are met.
///
/// `on_undecodable` is called once per file that fails to decode, before the
/// remaining files are read. The returned [`CountResult::undecodable`] is left
/// empty.
pub fn count_project_with<F>(
    path: impl AsRef<Path>,
    options: &CountOptions,
    mut on_undecodable: F,
) -> Result<CountResult>
where
    F: FnMut(&Path),
{
    let root = path.as_ref();
    let mut summary = ProjectSummary::new();

    for file in discover_files(root, &options.exclusions)? {
        let count = match count_file(&file) {
            Ok(count) => count,
            Err(err) if err.is_decode() => {
                debug!(path = %file.display(), "counting undecodable file as empty");
                on_undecodable(&file);
                FileCount::new()
            }
            Err(err) => return Err(err),
        };
        summary.add_file(&file, count);
    }

    info!(
        files = summary.total_files,
        lines = summary.total_lines,
        lines_code = summary.total_lines_code,
        "counted project"
    );

    Ok(CountResult {
        root: root.to_path_buf(),
        summary,
        undecodable: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::ExtensionStats;
    use crate::error::ExtlocError;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_simple_project(root: &Path) {
        create_file(&root.join("a.py"), b"x\n\ny\n");
        create_file(&root.join("b.md"), b"hello\n");
    }

    #[test]
    fn test_count_simple_project() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());

        let result = count_project(temp.path(), &CountOptions::new()).unwrap();
        let summary = &result.summary;

        assert_eq!(result.root, temp.path());
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_lines, 4);
        assert_eq!(summary.total_lines_code, 3);
        assert_eq!(
            summary.extension("py"),
            Some(&ExtensionStats {
                files: 1,
                lines: 3,
                lines_code: 2
            })
        );
        assert_eq!(
            summary.extension("md"),
            Some(&ExtensionStats {
                files: 1,
                lines: 1,
                lines_code: 1
            })
        );
        assert!(result.undecodable.is_empty());
    }

    #[test]
    fn test_count_empty_directory() {
        let temp = tempdir().unwrap();

        let result = count_project(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.summary, ProjectSummary::new());
        assert_eq!(result.summary.total_lines_code, 0);
    }

    #[test]
    fn test_excluded_files_never_counted() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());
        create_file(&temp.path().join("node_modules/x/y/z/deep.js"), b"a\nb\n");
        create_file(&temp.path().join("src/__pycache__/m.pyc"), b"\x00\xff");
        create_file(&temp.path().join("pkg/dist-info/RECORD"), b"r\n");

        let result = count_project(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.summary.total_files, 2);
        assert!(result.summary.extension("js").is_none());
        assert!(result.summary.extension("pyc").is_none());
        assert!(result.summary.extension("RECORD").is_none());
        assert!(result.undecodable.is_empty());
    }

    #[test]
    fn test_custom_exclusions() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());
        create_file(&temp.path().join("vendor/lib.c"), b"int x;\n");
        create_file(&temp.path().join("build/gen.c"), b"int y;\n");

        let exclusions = ExclusionSet::empty().exclude("vendor").unwrap();
        let options = CountOptions::new().exclusions(exclusions);
        let result = count_project(temp.path(), &options).unwrap();

        assert_eq!(result.summary.extension("c").map(|s| s.files), Some(1));
        assert_eq!(result.summary.total_files, 3);
    }

    #[test]
    fn test_undecodable_file_counts_as_empty() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());
        let binary = temp.path().join("logo.png");
        create_file(&binary, &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0xff]);

        let result = count_project(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.undecodable, vec![binary]);
        assert_eq!(result.summary.total_files, 3);
        assert_eq!(result.summary.total_lines, 4);
        assert_eq!(
            result.summary.extension("png"),
            Some(&ExtensionStats {
                files: 1,
                lines: 0,
                lines_code: 0
            })
        );
    }

    #[test]
    fn test_count_project_with_streams_diagnostics() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("a.bin"), b"\xff");
        create_file(&temp.path().join("b.txt"), b"ok\n");
        create_file(&temp.path().join("c.bin"), b"\xc3\x28");

        let mut seen = Vec::new();
        let result = count_project_with(temp.path(), &CountOptions::new(), |path| {
            seen.push(path.file_name().unwrap().to_string_lossy().to_string());
        })
        .unwrap();

        assert_eq!(seen, vec!["a.bin", "c.bin"]);
        assert!(result.undecodable.is_empty());
        assert_eq!(result.summary.total_files, 3);
        assert_eq!(result.summary.total_lines_code, 1);
    }

    #[test]
    fn test_count_is_idempotent() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());
        create_file(&temp.path().join("src/Makefile"), b"all:\n\techo hi\n\n");

        let first = count_project(temp.path(), &CountOptions::new()).unwrap();
        let second = count_project(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(first.summary, second.summary);
        assert_eq!(
            first.summary.extension("Makefile"),
            Some(&ExtensionStats {
                files: 1,
                lines: 3,
                lines_code: 2
            })
        );
    }

    #[test]
    fn test_count_nonexistent_path() {
        let result = count_project("/nonexistent/path", &CountOptions::new());
        assert!(matches!(result, Err(ExtlocError::PathNotFound(_))));
    }

    #[test]
    fn test_count_file_root_fails() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("a.py");
        fs::write(&file_path, "x = 1\n").unwrap();

        let result = count_project(&file_path, &CountOptions::new());
        assert!(matches!(result, Err(ExtlocError::NotADirectory(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_aborts_count() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());
        std::os::unix::fs::symlink(temp.path().join("missing"), temp.path().join("broken.txt"))
            .unwrap();

        let result = count_project(temp.path(), &CountOptions::new());
        assert!(matches!(result, Err(ExtlocError::FileRead { .. })));
    }
}
