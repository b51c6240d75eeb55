use serde::{Deserialize, Serialize};

/// Synonym delimiter inside a target cell ("Schubkarre, Karre").
pub const SYNONYM_DELIMITER: char = ',';

/// Normalized targets at or below this length fall under the stricter
/// short-word threshold.
pub const SHORT_WORD_MAX_CHARS: usize = 3;

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.75;
pub const DEFAULT_SHORT_WORD_THRESHOLD: f64 = 0.85;

/// How a target is compared against transcript words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Normalized forms must be equal.
    Strict,
    /// Target must be contained in the word.
    Contains,
    /// Containment or similarity ratio above the threshold.
    #[default]
    Fuzzy,
}

impl std::str::FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ScoringMode::Strict),
            "contains" => Ok(ScoringMode::Contains),
            "fuzzy" => Ok(ScoringMode::Fuzzy),
            _ => Err(format!(
                "Unknown mode: {}. Use strict, contains, or fuzzy",
                s
            )),
        }
    }
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringMode::Strict => write!(f, "strict"),
            ScoringMode::Contains => write!(f, "contains"),
            ScoringMode::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Run-level matching parameters, fixed for a whole run.
///
/// Thresholds are fractions in 0..=1 and are compared against the
/// 0..=100 similarity scale.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    pub mode: ScoringMode,
    /// General credit threshold for fuzzy matches.
    pub fuzzy_threshold: f64,
    /// Stricter threshold for targets of 3 or fewer normalized characters.
    pub short_word_threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Fuzzy,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            short_word_threshold: DEFAULT_SHORT_WORD_THRESHOLD,
        }
    }
}

/// Outcome of matching one target specification against one transcript.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    /// Best-matching word in its original spelling, for auditability.
    pub matched_word: Option<String>,
    /// Similarity in 0..=100.
    pub similarity: f64,
    /// 0 or 1.
    pub points: u32,
}

impl MatchOutcome {
    /// Terminal no-match outcome.
    pub fn none() -> Self {
        Self::default()
    }
}
