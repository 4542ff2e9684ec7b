//! Query processing: sort extension rows and compute shares.
//!
//! This module handles the third stage of the pipeline - turning a finished
//! `ProjectSummary` into ordered rows with percentage shares.
//!
//! ## Example
//!
//! ```rust,ignore
//! use extloclib::query::SummaryQuerySet;
//!
//! let queryset = SummaryQuerySet::from_summary(&result.summary);
//! for item in &queryset.items {
//!     println!("{} {}%", item.label, item.share);
//! }
//! ```

pub mod queryset;

pub use queryset::{share_of, QueryItem, SummaryQuerySet};
