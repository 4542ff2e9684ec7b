//! Data collection: count files and aggregate statistics.
//!
//! This module handles the second stage of the pipeline - reading each
//! discovered file and folding its counts into a project summary. It provides:
//!
//! - **Reading**: universal-newline line splitting and per-file counts
//! - **Statistics**: `FileCount`, `ExtensionStats`, `ProjectSummary`
//! - **Counting**: High-level API (`count_project`, `count_project_with`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use extloclib::data::{count_project, CountOptions};
//!
//! let result = count_project(".", &CountOptions::new())?;
//! println!("Non-blank lines: {}", result.summary.total_lines_code);
//! ```

pub mod counter;
pub mod reader;
pub mod stats;

pub use counter::{count_project, count_project_with, CountOptions, CountResult};
pub use reader::{count_file, count_lines, is_code_line, split_lines, Lines};
pub use stats::{extension_key, ExtensionStats, FileCount, ProjectSummary};
