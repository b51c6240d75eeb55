use crate::error::{GraderError, Result};
use crate::matcher::{
    MatchOptions, ScoringMode, DEFAULT_FUZZY_THRESHOLD, DEFAULT_SHORT_WORD_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted run defaults, overridable per invocation from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring_mode: ScoringMode,
    pub fuzzy_threshold: f64,
    pub short_word_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::Fuzzy,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            short_word_threshold: DEFAULT_SHORT_WORD_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GraderError::Config("home directory not found".into()))?;
        Ok(home
            .join(".config")
            .join("transcript-grader")
            .join("config.json"))
    }

    pub fn set_mode(&mut self, mode: ScoringMode) -> Result<()> {
        self.scoring_mode = mode;
        self.save()
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        self.fuzzy_threshold = validate_threshold(threshold)?;
        self.save()
    }

    pub fn set_short_word_threshold(&mut self, threshold: f64) -> Result<()> {
        self.short_word_threshold = validate_threshold(threshold)?;
        self.save()
    }

    /// Human-readable listing of the current values, one per line.
    pub fn describe(&self) -> String {
        format!(
            "  Scoring mode:         {}\n  Fuzzy threshold:      {:.2}\n  Short-word threshold: {:.2}",
            self.scoring_mode, self.fuzzy_threshold, self.short_word_threshold
        )
    }

    /// Engine options for one run, with CLI overrides applied on top of
    /// the persisted defaults.
    pub fn match_options(
        &self,
        mode: Option<ScoringMode>,
        threshold: Option<f64>,
        short_word_threshold: Option<f64>,
    ) -> Result<MatchOptions> {
        Ok(MatchOptions {
            mode: mode.unwrap_or(self.scoring_mode),
            fuzzy_threshold: match threshold {
                Some(t) => validate_threshold(t)?,
                None => self.fuzzy_threshold,
            },
            short_word_threshold: match short_word_threshold {
                Some(t) => validate_threshold(t)?,
                None => self.short_word_threshold,
            },
        })
    }
}

fn validate_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(GraderError::Config(format!(
            "threshold must be between 0.0 and 1.0, got {}",
            threshold
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = Config::default();
        assert_eq!(config.scoring_mode, ScoringMode::Fuzzy);
        assert!((config.fuzzy_threshold - 0.75).abs() < f64::EPSILON);
        assert!((config.short_word_threshold - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::default();
        let options = config
            .match_options(Some(ScoringMode::Strict), Some(0.9), None)
            .unwrap();
        assert_eq!(options.mode, ScoringMode::Strict);
        assert!((options.fuzzy_threshold - 0.9).abs() < f64::EPSILON);
        assert!((options.short_word_threshold - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_describe_lists_all_values() {
        let described = Config::default().describe();
        assert!(described.contains("fuzzy"));
        assert!(described.contains("0.75"));
        assert!(described.contains("0.85"));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = Config::default();
        assert!(config.match_options(None, Some(1.5), None).is_err());
        assert!(config.match_options(None, None, Some(-0.1)).is_err());
    }
}
