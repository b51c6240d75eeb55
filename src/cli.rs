use crate::matcher::ScoringMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "transcript-grader")]
#[command(about = "Automated grading of ASR transcripts against Excel answer keys", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Grade a transcript folder against a solutions workbook
    Grade {
        /// Solutions workbook (first column file name, second column target)
        #[arg(required = true)]
        workbook: PathBuf,

        /// Folder containing the transcript files (.json / .txt)
        #[arg(short, long, default_value = "transcripts")]
        transcripts: PathBuf,

        /// Output workbook or directory (default: Grading_Results.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scoring mode (strict/contains/fuzzy)
        #[arg(short, long)]
        mode: Option<ScoringMode>,

        /// General fuzzy threshold (0.0-1.0)
        #[arg(long)]
        threshold: Option<f64>,

        /// Threshold for targets of 3 or fewer characters (0.0-1.0)
        #[arg(long)]
        short_threshold: Option<f64>,
    },

    /// Match a single target against a transcript string
    Check {
        /// Target specification, synonyms separated by commas
        #[arg(short = 'T', long)]
        target: String,

        /// Transcript text
        #[arg(short = 'x', long)]
        text: String,

        /// Scoring mode (strict/contains/fuzzy)
        #[arg(short, long)]
        mode: Option<ScoringMode>,

        /// General fuzzy threshold (0.0-1.0)
        #[arg(long)]
        threshold: Option<f64>,

        /// Threshold for targets of 3 or fewer characters (0.0-1.0)
        #[arg(long)]
        short_threshold: Option<f64>,
    },

    /// Show or edit the persisted defaults
    Config {
        /// Set the default scoring mode
        #[arg(long)]
        set_mode: Option<ScoringMode>,

        /// Set the default fuzzy threshold (0.0-1.0)
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Set the default short-word threshold (0.0-1.0)
        #[arg(long)]
        set_short_threshold: Option<f64>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },
}
