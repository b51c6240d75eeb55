pub mod excel;

use crate::error::Result;
use crate::grader::{GradeRow, GradeSummary};
use crate::matcher::MatchOptions;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_NAME: &str = "Grading_Results";

/// Resolve the report path: directories (or extension-less paths) get the
/// default file name appended.
pub fn report_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", DEFAULT_REPORT_NAME))
    } else {
        output.to_path_buf()
    }
}

/// Write the grading report workbook.
pub fn export_results(
    rows: &[GradeRow],
    summary: &GradeSummary,
    options: &MatchOptions,
    output: &Path,
) -> Result<PathBuf> {
    let path = report_path(output);
    excel::generate_report(rows, summary, options, &path)?;
    Ok(path)
}
