//! Query set: sorted per-extension rows ready for table rendering.
//!
//! The data pipeline is:
//! 1. Raw Data (ProjectSummary)
//! 2. QuerySet (sorted, with percentage shares)
//! 3. ReportTable (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::stats::{ExtensionStats, ProjectSummary};

/// A single extension row before string formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryItem {
    /// Extension key
    pub label: String,
    /// Statistics for this extension
    pub stats: ExtensionStats,
    /// Share of the project's non-blank lines, in percent, rounded to 3 places
    pub share: f64,
}

/// Query set for a project summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryQuerySet {
    /// Extension rows, most non-blank lines first
    pub items: Vec<QueryItem>,
    /// Project totals, in the same shape as a row
    pub total: ExtensionStats,
}

impl SummaryQuerySet {
    /// Build the query set from a finished summary.
    ///
    /// Rows are ordered by `lines_code` descending; equal counts fall back to
    /// the extension key in ascending byte order.
    pub fn from_summary(summary: &ProjectSummary) -> Self {
        let total = ExtensionStats {
            files: summary.total_files,
            lines: summary.total_lines,
            lines_code: summary.total_lines_code,
        };

        // file_types iterates in key order and sort_by is stable
        let mut items: Vec<QueryItem> = summary
            .file_types
            .iter()
            .map(|(label, stats)| QueryItem {
                label: label.clone(),
                stats: *stats,
                share: share_of(stats.lines_code, total.lines_code),
            })
            .collect();
        items.sort_by(|a, b| b.stats.lines_code.cmp(&a.stats.lines_code));

        SummaryQuerySet { items, total }
    }
}

/// Percentage of `whole` taken by `part`, rounded to three decimal places.
///
/// A zero `whole` gives `0.0` rather than dividing by zero.
pub fn share_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to(part as f64 / whole as f64 * 100.0, 3)
}

/// Round to `digits` places using the exact decimal expansion of `value`.
fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::FileCount;
    use std::path::Path;

    fn summary_of(files: &[(&str, u64, u64)]) -> ProjectSummary {
        files
            .iter()
            .map(|&(path, lines, lines_code)| (path, FileCount { lines, lines_code }))
            .collect()
    }

    fn labels(qs: &SummaryQuerySet) -> Vec<&str> {
        qs.items.iter().map(|item| item.label.as_str()).collect()
    }

    #[test]
    fn test_share_of() {
        assert_eq!(share_of(80, 100), 80.0);
        assert_eq!(share_of(20, 100), 20.0);
        assert_eq!(share_of(2, 3), 66.667);
        assert_eq!(share_of(1, 3), 33.333);
        assert_eq!(share_of(1, 8), 12.5);
        assert_eq!(share_of(1, 7), 14.286);
        assert_eq!(share_of(5, 5), 100.0);
    }

    #[test]
    fn test_share_of_zero_whole() {
        assert_eq!(share_of(0, 0), 0.0);
    }

    #[test]
    fn test_sorted_by_lines_code_descending() {
        let summary = summary_of(&[("a.py", 3, 2), ("b.md", 1, 1), ("c.rs", 50, 40)]);
        let qs = SummaryQuerySet::from_summary(&summary);

        assert_eq!(labels(&qs), vec!["rs", "py", "md"]);
        assert_eq!(qs.items[0].stats.lines_code, 40);
        assert_eq!(qs.total.files, 3);
        assert_eq!(qs.total.lines, 54);
        assert_eq!(qs.total.lines_code, 43);
    }

    #[test]
    fn test_ties_ordered_by_label() {
        let summary = summary_of(&[("z.toml", 9, 5), ("a.yml", 5, 5), ("m.json", 7, 5)]);
        let qs = SummaryQuerySet::from_summary(&summary);

        assert_eq!(labels(&qs), vec!["json", "toml", "yml"]);
    }

    #[test]
    fn test_shares() {
        let summary = summary_of(&[("main.py", 100, 80), ("README.md", 30, 20)]);
        let qs = SummaryQuerySet::from_summary(&summary);

        assert_eq!(qs.items[0].label, "py");
        assert_eq!(qs.items[0].share, 80.0);
        assert_eq!(qs.items[1].label, "md");
        assert_eq!(qs.items[1].share, 20.0);
    }

    #[test]
    fn test_empty_summary() {
        let qs = SummaryQuerySet::from_summary(&ProjectSummary::new());

        assert!(qs.items.is_empty());
        assert_eq!(qs.total, ExtensionStats::new());
    }

    #[test]
    fn test_all_blank_project_has_zero_shares() {
        let mut summary = ProjectSummary::new();
        summary.add_file(Path::new("empty.txt"), FileCount { lines: 4, lines_code: 0 });
        summary.add_file(Path::new("blob.bin"), FileCount::new());
        let qs = SummaryQuerySet::from_summary(&summary);

        assert_eq!(qs.items.len(), 2);
        assert!(qs.items.iter().all(|item| item.share == 0.0));
    }
}
