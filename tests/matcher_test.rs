//! Engine scenario tests
//!
//! End-to-end checks of the matching & scoring engine against realistic
//! German dictation transcripts.

use transcript_grader::matcher::{find_best_match, MatchOptions, MatchOutcome, ScoringMode};

fn fuzzy(threshold: f64) -> MatchOptions {
    MatchOptions {
        mode: ScoringMode::Fuzzy,
        fuzzy_threshold: threshold,
        ..MatchOptions::default()
    }
}

/// Typo with a doubled letter still earns the point: "apfel" is contained
/// in "apfell", so the containment shortcut scores it 100 outright.
#[test]
fn test_apfel_with_trailing_typo() {
    let outcome = find_best_match("Apfel", "Ich habe einen Apfell gekauft.", &fuzzy(0.75));

    assert_eq!(outcome.matched_word.as_deref(), Some("Apfell"));
    assert_eq!(outcome.similarity, 100.0);
    assert_eq!(outcome.points, 1);
}

/// A typo with no substring relation falls through to the similarity
/// ratio ("bibliothek" vs "bibliotek" = 94.7).
#[test]
fn test_bibliothek_missing_letter() {
    let outcome = find_best_match(
        "Bibliothek",
        "Die Bibliotek hat viele interessante Bücher.",
        &fuzzy(0.75),
    );

    assert_eq!(outcome.matched_word.as_deref(), Some("Bibliotek"));
    assert!((outcome.similarity - 94.7).abs() < 0.1);
    assert_eq!(outcome.points, 1);
}

/// "Buß" folds to "buss", which contains the target "bus" outright.
#[test]
fn test_bus_eszett_spelling() {
    let outcome = find_best_match("Bus", "Ich fahre mit dem Buß zur Schule", &fuzzy(0.75));

    assert_eq!(outcome.matched_word.as_deref(), Some("Buß"));
    assert_eq!(outcome.similarity, 100.0);
    assert_eq!(outcome.points, 1);
}

/// A short target below the short-word gate earns nothing even though the
/// general threshold would have been cleared.
#[test]
fn test_short_target_gated_stricter() {
    // "eis" vs "es" scores 80: above the 0.75 general threshold, below
    // the 0.85 short-word gate.
    let outcome = find_best_match("Eis", "er hat es gegessen", &fuzzy(0.75));

    assert!((outcome.similarity - 80.0).abs() < 0.1);
    assert_eq!(outcome.points, 0);
}

/// Phonetic misspelling scores 81.8: credited at 0.75, denied at 0.85.
#[test]
fn test_spielplatz_phonetic_misspelling() {
    let outcome = find_best_match("Spielplatz", "Schbielplatz", &fuzzy(0.75));
    assert_eq!(outcome.matched_word.as_deref(), Some("Schbielplatz"));
    assert!((outcome.similarity - 81.8).abs() < 0.1);
    assert_eq!(outcome.points, 1);

    let outcome = find_best_match("Spielplatz", "Schbielplatz", &fuzzy(0.85));
    assert!((outcome.similarity - 81.8).abs() < 0.1);
    assert_eq!(outcome.points, 0);
}

/// Each synonym is judged against its own threshold: a winning short
/// synonym is gated at 0.85 even when a longer synonym in the same target
/// would have been credited at 0.75 for the same similarity.
#[test]
fn test_threshold_chosen_per_synonym() {
    // "haus" vs "maus" = 75 (passes the general 0.75 threshold);
    // "eis" vs "es" = 80 (fails the 0.85 short-word gate).
    let outcome = find_best_match("Haus, Eis", "die maus und es", &fuzzy(0.75));

    // The short synonym wins on similarity but earns nothing through its
    // own stricter gate.
    assert_eq!(outcome.matched_word.as_deref(), Some("es"));
    assert!((outcome.similarity - 80.0).abs() < 0.1);
    assert_eq!(outcome.points, 0);

    // Alone, the long synonym at a lower similarity is credited.
    let outcome = find_best_match("Haus", "die maus und es", &fuzzy(0.75));
    assert!((outcome.similarity - 75.0).abs() < 0.1);
    assert_eq!(outcome.points, 1);
}

/// The exact-matching synonym wins even when a longer synonym comes first.
#[test]
fn test_later_synonym_with_exact_match_wins() {
    let outcome = find_best_match(
        "Schubkarre, Karre",
        "Die Karre steht im Hof",
        &fuzzy(0.75),
    );

    assert_eq!(outcome.matched_word.as_deref(), Some("Karre"));
    assert_eq!(outcome.similarity, 100.0);
    assert_eq!(outcome.points, 1);
}

/// Empty transcript is a terminal no-match for every mode.
#[test]
fn test_empty_transcript() {
    for mode in [
        ScoringMode::Strict,
        ScoringMode::Contains,
        ScoringMode::Fuzzy,
    ] {
        let options = MatchOptions {
            mode,
            ..MatchOptions::default()
        };
        let outcome = find_best_match("Apfel", "   ", &options);
        assert_eq!(outcome, MatchOutcome::none());
    }
}

/// Whitespace-only or punctuation-only targets never match.
#[test]
fn test_degenerate_targets() {
    let outcome = find_best_match("", "Der Apfel liegt hier", &fuzzy(0.75));
    assert_eq!(outcome, MatchOutcome::none());

    let outcome = find_best_match("?!.", "Der Apfel liegt hier", &fuzzy(0.75));
    assert_eq!(outcome, MatchOutcome::none());
}

/// Strict mode awards the point iff a word normalizes to exactly the target.
#[test]
fn test_strict_mode_iff_equality() {
    let options = MatchOptions {
        mode: ScoringMode::Strict,
        ..MatchOptions::default()
    };

    let hit = find_best_match("Katze", "Die Katze sitzt auf dem Fensterbrett.", &options);
    assert_eq!(hit.points, 1);

    let miss = find_best_match("Katze", "Die Katzen sitzen dort", &options);
    assert_eq!(miss.points, 0);
}

/// Contains mode awards the point iff the target is a substring of a word.
#[test]
fn test_contains_mode_iff_substring() {
    let options = MatchOptions {
        mode: ScoringMode::Contains,
        ..MatchOptions::default()
    };

    let hit = find_best_match("Haus", "Das istmein Haus.", &options);
    assert_eq!(hit.matched_word.as_deref(), Some("Haus."));
    assert_eq!(hit.points, 1);

    let miss = find_best_match("Haus", "Das ist meine Wohnung.", &options);
    assert_eq!(miss.points, 0);
}
