//! Output formatting: present data as a table.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting a query set for display. It provides:
//!
//! - **ReportTable**: Table-ready data with headers and rows, rendered via `Display`
//! - **TableRow**: Individual row with label and formatted values
//!
//! ## Example
//!
//! ```rust,ignore
//! use extloclib::output::ReportTable;
//!
//! let table = ReportTable::from_queryset(&queryset);
//! println!("{table}");
//! ```

pub mod table;

pub use table::{format_percentage, Align, ReportTable, TableRow, HEADERS, TOTAL_LABEL};
