//! Per-row grading pipeline.
//!
//! Each solution row is independent and pure (a lookup, a file read and
//! one engine call), so rows are graded in parallel.

use crate::extractor;
use crate::matcher::{self, MatchOptions};
use crate::scanner::TranscriptIndex;
use crate::sheet::SolutionRow;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

pub const MISSING_TRANSCRIPT: &str = "[MISSING]";
pub const UNREADABLE_TRANSCRIPT: &str = "[UNREADABLE]";
pub const NO_MATCH_MARKER: &str = "-";

/// One row of the grading report.
#[derive(Debug, Clone)]
pub struct GradeRow {
    pub file_name: String,
    pub target: String,
    /// Original spelling of the best-matching word, or `-`.
    pub matched_word: String,
    /// Full transcript, or a missing/unreadable marker.
    pub transcript: String,
    pub points: u32,
    /// Rounded to one decimal.
    pub similarity: f64,
    pub found: bool,
}

impl GradeRow {
    pub fn status(&self) -> &'static str {
        if self.found {
            "OK"
        } else {
            "MISSING"
        }
    }
}

/// Aggregate counters over all graded rows.
#[derive(Debug, Clone, Default)]
pub struct GradeSummary {
    pub total: usize,
    /// Rows with a non-empty target; denominator of the success rate.
    pub graded: usize,
    pub points: u32,
    pub success_rate: f64,
}

/// Grade all rows against the transcript index.
pub fn grade_rows(
    rows: &[SolutionRow],
    index: &TranscriptIndex,
    options: &MatchOptions,
    show_progress: bool,
) -> Vec<GradeRow> {
    let progress = if show_progress {
        ProgressBar::new(rows.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    rows.par_iter()
        .progress_with(progress)
        .map(|row| grade_row(row, index, options))
        .collect()
}

fn grade_row(row: &SolutionRow, index: &TranscriptIndex, options: &MatchOptions) -> GradeRow {
    let (transcript, found) = match index.find(&row.file_name) {
        Some(path) => match extractor::read_transcript(path) {
            Ok(text) => (text, true),
            Err(_) => (UNREADABLE_TRANSCRIPT.to_string(), false),
        },
        None => (MISSING_TRANSCRIPT.to_string(), false),
    };

    let outcome = if found && !row.target.is_empty() {
        matcher::find_best_match(&row.target, &transcript, options)
    } else {
        matcher::MatchOutcome::none()
    };

    GradeRow {
        file_name: row.file_name.clone(),
        target: row.target.clone(),
        matched_word: outcome
            .matched_word
            .unwrap_or_else(|| NO_MATCH_MARKER.to_string()),
        transcript,
        points: outcome.points,
        similarity: (outcome.similarity * 10.0).round() / 10.0,
        found,
    }
}

/// Compute the aggregate report.
///
/// The success rate divides awarded points by the number of rows with a
/// non-empty target, so decorative rows don't dilute the percentage.
pub fn summarize(rows: &[GradeRow]) -> GradeSummary {
    let total = rows.len();
    let graded = rows.iter().filter(|r| !r.target.is_empty()).count();
    let points: u32 = rows.iter().map(|r| r.points).sum();
    let success_rate = if graded > 0 {
        points as f64 / graded as f64 * 100.0
    } else {
        0.0
    };

    GradeSummary {
        total,
        graded,
        points,
        success_rate,
    }
}
