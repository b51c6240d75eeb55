//! Text normalization for comparison.
//!
//! Targets and transcript words are compared on their normalized forms only;
//! the original spelling is kept for display.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Keeps word characters, whitespace and the German umlauts. Everything
    // else (punctuation, quotes, ...) is removed.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\säöü]").unwrap();
}

/// Normalize text for comparison: lowercase, `ß` folded to `ss`,
/// punctuation stripped, whitespace collapsed to single spaces.
///
/// `ß` is folded before filtering so that spellings like "Buß" and "Buss"
/// normalize identically. Idempotent; any input yields a (possibly empty)
/// string and never fails.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase().replace('ß', "ss");
    let stripped = NON_WORD.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(normalize("Der Apfel, liegt!"), "der apfel liegt");
    }

    #[test]
    fn test_eszett_folding() {
        assert_eq!(normalize("Buß"), "buss");
        assert_eq!(normalize("Straße"), "strasse");
    }

    #[test]
    fn test_umlauts_survive() {
        assert_eq!(normalize("Bücher ÄPFEL schön"), "bücher äpfel schön");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize("  ein\t zwei \n drei  "), "ein zwei drei");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!.,;"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Ich fahre mit dem Buß, zur Schule!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalize("Gleis 9, bitte."), "gleis 9 bitte");
    }
}
