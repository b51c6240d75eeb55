//! Excel report generation.
//!
//! One `Results` sheet with the per-item rows and one `Summary` sheet with
//! the aggregate counters and run parameters.

use crate::error::{GraderError, Result};
use crate::grader::{GradeRow, GradeSummary};
use crate::matcher::MatchOptions;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

const RESULT_COLUMNS: &[(&str, f64)] = &[
    ("Filename", 24.0),
    ("Target", 24.0),
    ("Found Word", 18.0),
    ("Transcript", 50.0),
    ("Points", 8.0),
    ("Similarity (%)", 13.0),
    ("Status", 10.0),
];

pub fn generate_report(
    rows: &[GradeRow],
    summary: &GradeSummary,
    options: &MatchOptions,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let miss_format = Format::new().set_font_color(Color::RGB(0xAA3333));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Results")
        .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;

    for (col, (title, width)) in RESULT_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;
        worksheet
            .write_with_format(0, col, *title, &header_format)
            .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write(r, 0, &row.file_name)
            .and_then(|ws| ws.write(r, 1, &row.target))
            .and_then(|ws| ws.write(r, 2, &row.matched_word))
            .and_then(|ws| ws.write(r, 3, &row.transcript))
            .and_then(|ws| ws.write(r, 4, row.points))
            .and_then(|ws| ws.write(r, 5, row.similarity))
            .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;

        if row.found {
            worksheet.write(r, 6, row.status())
        } else {
            worksheet.write_with_format(r, 6, row.status(), &miss_format)
        }
        .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;
    }

    write_summary_sheet(&mut workbook, summary, options)?;

    workbook
        .save(output_path)
        .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(
    workbook: &mut Workbook,
    summary: &GradeSummary,
    options: &MatchOptions,
) -> Result<()> {
    let label_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Summary")
        .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;
    worksheet
        .set_column_width(0, 24.0)
        .and_then(|ws| ws.set_column_width(1, 24.0))
        .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;

    let lines: Vec<(&str, String)> = vec![
        ("Total rows", summary.total.to_string()),
        ("Graded rows", summary.graded.to_string()),
        ("Points awarded", summary.points.to_string()),
        ("Success rate", format!("{:.1}%", summary.success_rate)),
        ("Scoring mode", options.mode.to_string()),
        ("Fuzzy threshold", format!("{:.2}", options.fuzzy_threshold)),
        (
            "Short-word threshold",
            format!("{:.2}", options.short_word_threshold),
        ),
        (
            "Generated at",
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
    ];

    for (i, (label, value)) in lines.iter().enumerate() {
        let r = i as u32;
        worksheet
            .write_with_format(r, 0, *label, &label_format)
            .and_then(|ws| ws.write(r, 1, value))
            .map_err(|e| GraderError::ExcelGeneration(e.to_string()))?;
    }

    Ok(())
}
