//! Transcript file discovery.
//!
//! The transcript folder is scanned once and indexed by file stem, so each
//! solution row costs a single lookup. JSON transcripts take precedence
//! over plain-text ones with the same stem.

use crate::error::{GraderError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const TRANSCRIPT_EXTENSIONS: &[&str] = &["json", "txt"];

/// Stem-indexed view of the transcript folder.
#[derive(Debug, Default)]
pub struct TranscriptIndex {
    entries: HashMap<String, PathBuf>,
}

impl TranscriptIndex {
    /// Look up the transcript for a solution file name ("Audio1.wav" finds
    /// "Audio1.json" or "Audio1.txt").
    pub fn find(&self, file_name: &str) -> Option<&Path> {
        let stem = Path::new(file_name.trim())
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())?;
        self.entries.get(&stem).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scan the transcript folder (non-recursive) into an index.
pub fn scan_folder(folder: &Path) -> Result<TranscriptIndex> {
    if !folder.exists() {
        return Err(GraderError::FolderNotFound(folder.display().to_string()));
    }

    let mut index = TranscriptIndex::default();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
            continue;
        };
        if !TRANSCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };

        match index.entries.get(&stem) {
            // JSON wins over TXT for the same stem.
            Some(existing) if !is_json(existing) && ext == "json" => {
                index.entries.insert(stem, path.to_path_buf());
            }
            Some(_) => {}
            None => {
                index.entries.insert(stem, path.to_path_buf());
            }
        }
    }

    Ok(index)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
