//! # extloclib
//!
//! A lines-of-code counter library that rolls up total and non-blank lines by
//! file extension.
//!
//! ## Overview
//!
//! Counting runs as a four stage pipeline, one module per stage:
//!
//! - **source**: Walk the project tree, skipping files under excluded directories
//! - **data**: Count lines per file and fold them into a `ProjectSummary`
//! - **query**: Sort extensions by non-blank lines and compute their shares
//! - **output**: Format the result as a text table
//!
//! A line is *code* when anything but whitespace remains after trimming. No
//! language-specific parsing is done, so comments count as code.
//!
//! ## Exclusions
//!
//! By default files are skipped when the path of their containing directory
//! contains any of `node_modules`, `build`, `dist`, `venv`, `.git`, `.idea`,
//! `.vscode` or `__pycache__` as a plain substring. See [`ExclusionSet`].
//!
//! ## Example
//!
//! ```rust
//! use extloclib::{count_project, CountOptions, ReportTable, SummaryQuerySet};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.py"), "x\n\ny\n").unwrap();
//! fs::write(dir.path().join("b.md"), "hello\n").unwrap();
//! fs::create_dir(dir.path().join("node_modules")).unwrap();
//! fs::write(dir.path().join("node_modules/dep.js"), "ignored\n").unwrap();
//!
//! let result = count_project(dir.path(), &CountOptions::new()).unwrap();
//! assert_eq!(result.summary.total_files, 2);
//! assert_eq!(result.summary.extension("py").unwrap().lines_code, 2);
//!
//! let queryset = SummaryQuerySet::from_summary(&result.summary);
//! assert_eq!(queryset.items[0].label, "py");
//!
//! let table = ReportTable::from_queryset(&queryset).to_string();
//! assert!(table.contains("66.667%"));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    count_file, count_lines, count_project, count_project_with, extension_key, CountOptions,
    CountResult, ExtensionStats, FileCount, ProjectSummary,
};
pub use error::ExtlocError;
pub use output::{format_percentage, ReportTable, TableRow};
pub use query::{share_of, QueryItem, SummaryQuerySet};
pub use source::{discover_files, ExclusionSet, SourceFiles, DEFAULT_EXCLUSIONS};

/// Result type for extloclib operations
pub type Result<T> = std::result::Result<T, ExtlocError>;
