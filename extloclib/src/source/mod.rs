//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - walking the project
//! tree and yielding the files that survive exclusion filtering.
//!
//! - **ExclusionSet**: directory-path substrings that disqualify a file
//! - **SourceFiles**: lazy iterator over the files of one traversal
//!
//! ## Example
//!
//! ```rust,ignore
//! use extloclib::source::{discover_files, ExclusionSet};
//!
//! let exclusions = ExclusionSet::new().exclude("vendor")?;
//! for path in discover_files(".", &exclusions)? {
//!     println!("{}", path.display());
//! }
//! ```

pub mod filter;

pub use filter::{discover_files, ExclusionSet, SourceFiles, DEFAULT_EXCLUSIONS};
