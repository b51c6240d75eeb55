//! Matching & scoring engine.
//!
//! Compares a target specification (one or more comma-delimited synonyms)
//! against the words of a transcript and returns the best-matching word,
//! its similarity and whether it earns the point.
//!
//! Pure computation over in-memory strings: no I/O, no shared state, and
//! every failure shape is a value-level no-match outcome.

pub mod similarity;
mod types;

pub use types::{
    MatchOptions, MatchOutcome, ScoringMode, DEFAULT_FUZZY_THRESHOLD,
    DEFAULT_SHORT_WORD_THRESHOLD, SHORT_WORD_MAX_CHARS, SYNONYM_DELIMITER,
};

use crate::normalizer::normalize;

/// Find the best match for `target_spec` in `transcript`.
///
/// Each synonym is matched on its own against every whitespace-delimited
/// word of the transcript; the synonym with the strictly highest best
/// similarity wins (first synonym on ties). The returned word is the
/// original, un-normalized token.
pub fn find_best_match(
    target_spec: &str,
    transcript: &str,
    options: &MatchOptions,
) -> MatchOutcome {
    let synonyms: Vec<String> = target_spec
        .split(SYNONYM_DELIMITER)
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect();

    if synonyms.is_empty() {
        return MatchOutcome::none();
    }

    let words: Vec<&str> = transcript.split_whitespace().collect();
    if words.is_empty() {
        return MatchOutcome::none();
    }

    let mut best = MatchOutcome::none();
    let mut best_seen = false;

    for synonym in &synonyms {
        let candidate = match_synonym(synonym, &words, options);

        if !best_seen || candidate.similarity > best.similarity {
            best = candidate;
            best_seen = true;
        }
    }

    best
}

/// Match a single normalized synonym against all transcript words.
fn match_synonym(synonym: &str, words: &[&str], options: &MatchOptions) -> MatchOutcome {
    let mut best_word: Option<String> = None;
    let mut best_similarity = 0.0;

    for word in words {
        let current = word_similarity(synonym, &normalize(word), options.mode);
        if current > best_similarity {
            best_similarity = current;
            best_word = Some((*word).to_string());
        }
    }

    MatchOutcome {
        matched_word: best_word,
        similarity: best_similarity,
        points: award_points(synonym, best_similarity, options),
    }
}

/// Similarity of one synonym/word pair in 0..=100.
fn word_similarity(synonym: &str, word: &str, mode: ScoringMode) -> f64 {
    match mode {
        ScoringMode::Strict => {
            if synonym == word {
                100.0
            } else {
                0.0
            }
        }
        ScoringMode::Contains => {
            if word.contains(synonym) {
                100.0
            } else {
                0.0
            }
        }
        ScoringMode::Fuzzy => {
            if word.contains(synonym) {
                100.0
            } else {
                similarity::ratio(synonym, word) * 100.0
            }
        }
    }
}

/// Points for one synonym, given its best similarity.
///
/// Short targets (<= 3 normalized chars) substring-match too many longer
/// words, so they are gated behind the separate short-word threshold
/// instead of the general one.
fn award_points(synonym: &str, best_similarity: f64, options: &MatchOptions) -> u32 {
    let threshold = if synonym.chars().count() <= SHORT_WORD_MAX_CHARS {
        options.short_word_threshold
    } else {
        options.fuzzy_threshold
    };

    if best_similarity >= threshold * 100.0 {
        1
    } else {
        0
    }
}
