//! Table-ready data structures for the extension report.
//!
//! The data flow is:
//! 1. Raw Data (ProjectSummary)
//! 2. QuerySet (sorted, with shares)
//! 3. ReportTable (formatted strings for display)
//!
//! ReportTable only formats. Sorting and percentage math happen in the
//! QuerySet layer.

use std::fmt;

use console::measure_text_width;
use serde::{Deserialize, Serialize};

use crate::data::stats::ExtensionStats;
use crate::query::queryset::SummaryQuerySet;

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = [
    "File Type",
    "Files",
    "Lines",
    "Lines of Code",
    "Percentage of Code",
];

/// Label of the first row, which carries the project totals.
pub const TOTAL_LABEL: &str = "Total";

/// Share shown on the total row.
const TOTAL_SHARE: &str = "100%";

/// Padding added to every header when sizing its column.
const HEADER_PADDING: usize = 2;

const COLUMN_SEPARATOR: &str = "  ";

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Right,
}

/// Label and share columns are text; the counts are numbers.
const ALIGNMENTS: [Align; 5] = [
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Left,
];

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (extension key or "Total")
    pub label: String,
    /// Remaining cells, as strings ready for display
    pub values: Vec<String>,
}

impl TableRow {
    fn cells(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.values.iter().map(String::as_str))
    }
}

/// Table-ready report data.
///
/// `rows[0]` is always the total row. Rendering goes through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Column headers
    pub headers: Vec<String>,
    /// Total row followed by one row per extension
    pub rows: Vec<TableRow>,
}

impl ReportTable {
    /// Create a ReportTable from a SummaryQuerySet.
    pub fn from_queryset(qs: &SummaryQuerySet) -> Self {
        let mut rows = Vec::with_capacity(qs.items.len() + 1);
        rows.push(TableRow {
            label: TOTAL_LABEL.to_string(),
            values: format_stats(&qs.total, TOTAL_SHARE.to_string()),
        });
        rows.extend(qs.items.iter().map(|item| TableRow {
            label: item.label.clone(),
            values: format_stats(&item.stats, format_percentage(item.share)),
        }));

        ReportTable {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    /// Display width of each column.
    ///
    /// A column is as wide as its widest cell, and at least two wider than
    /// its header.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| measure_text_width(h) + HEADER_PADDING)
            .collect();

        for row in &self.rows {
            for (i, cell) in row.cells().enumerate() {
                let width = measure_text_width(cell);
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }

        widths
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        let header = self.headers.iter().map(String::as_str);
        writeln!(f, "{}", render_line(header, &widths))?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write!(f, "{}", rule.join(COLUMN_SEPARATOR))?;

        for row in &self.rows {
            write!(f, "\n{}", render_line(row.cells(), &widths))?;
        }

        Ok(())
    }
}

/// Pad each cell to its column and join, trimming trailing whitespace.
fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            let align = ALIGNMENTS.get(i).copied().unwrap_or(Align::Left);
            pad(cell, width, align)
        })
        .collect();

    padded.join(COLUMN_SEPARATOR).trim_end().to_string()
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(measure_text_width(cell)));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}

fn format_stats(stats: &ExtensionStats, share: String) -> Vec<String> {
    vec![
        stats.files.to_string(),
        stats.lines.to_string(),
        stats.lines_code.to_string(),
        share,
    ]
}

/// Format a percentage with the shortest exact digits, always keeping one
/// fractional digit: `80.0%`, `66.667%`, `12.5%`.
pub fn format_percentage(share: f64) -> String {
    let digits = share.to_string();
    if digits.contains('.') || !share.is_finite() {
        format!("{digits}%")
    } else {
        format!("{digits}.0%")
    }
}
