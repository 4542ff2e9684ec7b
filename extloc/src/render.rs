//! Text rendering for CLI output

use std::path::Path;

use extloclib::{ProjectSummary, ReportTable, SummaryQuerySet};

/// Diagnostic printed for a file that could not be decoded as text
pub fn diagnostic_line(path: &Path) -> String {
    format!("Error reading file: {}", path.display())
}

/// Render the extension report for a finished summary
pub fn render_summary(summary: &ProjectSummary) -> String {
    let queryset = SummaryQuerySet::from_summary(summary);
    ReportTable::from_queryset(&queryset).to_string()
}
