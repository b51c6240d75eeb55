//! Solutions workbook loader.
//!
//! The answer key is an Excel workbook whose first worksheet carries the
//! transcript file name in column A and the target specification in
//! column B. Additional columns are ignored.

use crate::error::{GraderError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// One graded item from the answer key.
#[derive(Debug, Clone)]
pub struct SolutionRow {
    /// Declared transcript file name (extension may differ on disk).
    pub file_name: String,
    /// Target specification; empty when the cell was blank.
    pub target: String,
}

/// Load all solution rows from the first worksheet.
///
/// The header row is skipped, and rows whose file name starts with an
/// underscore are treated as system rows and ignored.
pub fn load_solutions(path: &Path) -> Result<Vec<SolutionRow>> {
    if !path.exists() {
        return Err(GraderError::FileNotFound(path.display().to_string()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| GraderError::WorkbookRead(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| GraderError::InvalidWorkbook("workbook has no worksheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| GraderError::WorkbookRead(e.to_string()))?;

    if range.width() < 2 {
        return Err(GraderError::InvalidWorkbook(
            "the solutions sheet needs at least two columns (file name, target)".into(),
        ));
    }

    let mut rows = Vec::new();

    for row in range.rows().skip(1) {
        let file_name = cell_text(&row[0]);
        if file_name.is_empty() || file_name.starts_with('_') {
            continue;
        }

        let mut target = row.get(1).map(cell_text).unwrap_or_default();
        // Spreadsheet tools render missing values as "nan"; treat that as
        // an empty target.
        if target.eq_ignore_ascii_case("nan") {
            target = String::new();
        }

        rows.push(SolutionRow { file_name, target });
    }

    Ok(rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}
