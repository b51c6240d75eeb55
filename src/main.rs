use clap::Parser;
use std::time::Instant;
use transcript_grader::{cli, config, error, export, grader, matcher, scanner, sheet};

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Grade {
            workbook,
            transcripts,
            output,
            mode,
            threshold,
            short_threshold,
        } => {
            let start = Instant::now();
            let options = config.match_options(mode, threshold, short_threshold)?;

            println!("📝 transcript-grader - Automated grading\n");
            println!("  Workbook:    {}", workbook.display());
            println!("  Transcripts: {}", transcripts.display());
            println!(
                "  Mode:        {} (threshold {:.2}, short-word {:.2})\n",
                options.mode, options.fuzzy_threshold, options.short_word_threshold
            );

            // 1. Load the answer key
            println!("[1/4] Loading solutions...");
            let rows = sheet::load_solutions(&workbook)?;
            println!("✔ {} entries loaded\n", rows.len());

            // 2. Index the transcript folder
            println!("[2/4] Scanning transcript folder...");
            let index = scanner::scan_folder(&transcripts)?;
            println!("✔ {} transcript files found\n", index.len());

            // 3. Grade
            println!("[3/4] Grading...");
            let graded = grader::grade_rows(&rows, &index, &options, !cli.verbose);
            if cli.verbose {
                for row in &graded {
                    println!(
                        "  {} -> {} ({:.1}%, {} pt, {})",
                        row.file_name,
                        row.matched_word,
                        row.similarity,
                        row.points,
                        row.status()
                    );
                }
            }
            let summary = grader::summarize(&graded);
            println!("✔ Grading finished\n");

            // 4. Export
            println!("[4/4] Writing report...");
            let output = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            let report = export::export_results(&graded, &summary, &options, &output)?;
            println!("✔ Report written: {}\n", report.display());

            println!("{}", "=".repeat(30));
            println!(" RESULTS");
            println!("   Total rows:      {}", summary.total);
            println!("   Graded rows:     {}", summary.graded);
            println!("   Points awarded:  {}", summary.points);
            println!("   Success rate:    {:.1}%", summary.success_rate);
            println!("   Duration:        {:.2} sec", start.elapsed().as_secs_f64());
            println!("{}", "=".repeat(30));
        }

        Commands::Check {
            target,
            text,
            mode,
            threshold,
            short_threshold,
        } => {
            let options = config.match_options(mode, threshold, short_threshold)?;
            let outcome = matcher::find_best_match(&target, &text, &options);

            println!("Target:     {}", target);
            println!("Transcript: {}", text);
            println!("Mode:       {}", options.mode);
            match &outcome.matched_word {
                Some(word) => println!("Match:      {}", word),
                None => println!("Match:      (none)"),
            }
            println!("Similarity: {:.1}%", outcome.similarity);
            println!("Points:     {}", outcome.points);
        }

        Commands::Config {
            set_mode,
            set_threshold,
            set_short_threshold,
            show,
        } => {
            let mut config = config;
            let changed =
                set_mode.is_some() || set_threshold.is_some() || set_short_threshold.is_some();

            if let Some(mode) = set_mode {
                config.set_mode(mode)?;
                println!("✔ Scoring mode set to {}", mode);
            }

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                println!("✔ Fuzzy threshold set to {:.2}", threshold);
            }

            if let Some(threshold) = set_short_threshold {
                config.set_short_word_threshold(threshold)?;
                println!("✔ Short-word threshold set to {:.2}", threshold);
            }

            // Default or --show: display the current values.
            if show || !changed {
                println!("Configuration:");
                println!("{}", config.describe());
            }
        }
    }

    Ok(())
}
