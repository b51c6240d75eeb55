//! Transcript content extraction.
//!
//! Reads transcript files with an encoding fallback (UTF-8, then Latin-1)
//! and resolves the plain transcript text out of structured provider
//! payloads. Providers nest the text in different places, so extraction
//! walks a small set of known field names.

use crate::error::Result;
use serde_json::Value;
use std::path::Path;

/// Read a transcript file and resolve it to plain text.
///
/// `.json` files go through payload extraction; anything else is returned
/// as-is (trimmed).
pub fn read_transcript(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let content = decode_with_fallback(bytes);
    let content = content.trim().to_string();

    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Ok(extract_text(&content))
    } else {
        Ok(content)
    }
}

/// UTF-8 first; invalid files are re-read as Latin-1, which accepts any
/// byte sequence, so decoding itself never fails.
fn decode_with_fallback(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Extract the transcript text from a provider JSON payload.
///
/// Tries, in order: a `full_transcript` field, a string-valued `text`
/// field, recursing into `transcription` or `result`, and joining
/// `utterances[].text` with spaces. Content that is not valid JSON is
/// returned unchanged; a payload with none of the known fields yields an
/// empty string.
pub fn extract_text(content: &str) -> String {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => find_text(&value).unwrap_or_default(),
        Err(_) => content.to_string(),
    }
}

fn find_text(value: &Value) -> Option<String> {
    let map = value.as_object()?;

    if let Some(Value::String(s)) = map.get("full_transcript") {
        if !s.is_empty() {
            return Some(s.clone());
        }
    }
    if let Some(Value::String(s)) = map.get("text") {
        return Some(s.clone());
    }
    if let Some(inner) = map.get("transcription") {
        return find_text(inner);
    }
    if let Some(inner) = map.get("result") {
        return find_text(inner);
    }
    if let Some(Value::Array(utterances)) = map.get("utterances") {
        let joined = utterances
            .iter()
            .map(|u| u.get("text").and_then(Value::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ");
        return Some(joined);
    }

    None
}
