//! Command-line interface for the extractor.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::driver::{run_pipeline, ErrorPolicy};
use crate::error::Result;
use crate::types::Pipeline;

/// IRS 990 Extractor - Turn 990, 990-EZ and 990-PF e-file XML into CSV tables.
#[derive(Parser)]
#[command(name = "irs990-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract one table from every filing under the input directory.
    Extract {
        /// Table to produce
        #[arg(value_enum)]
        pipeline: Pipeline,

        /// Directory scanned recursively for filings (default: data/)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output CSV file (default: output/<table>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Log and skip filings that fail instead of aborting the run
        #[arg(long)]
        continue_on_error: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            pipeline,
            input,
            output,
            continue_on_error,
        } => {
            let policy = if continue_on_error {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            };
            extract_command(pipeline, input.as_deref(), output.as_deref(), policy)
        }
    }
}

/// Output file used when none is given on the command line.
#[must_use]
pub fn default_output_path(pipeline: Pipeline) -> PathBuf {
    Path::new(DEFAULT_OUTPUT_DIR).join(pipeline.default_file_name())
}

/// Execute the extract command.
fn extract_command(
    pipeline: Pipeline,
    input: Option<&Path>,
    output: Option<&Path>,
    policy: ErrorPolicy,
) -> Result<()> {
    let input_dir = input.unwrap_or(Path::new(DEFAULT_INPUT_DIR));
    let output_file = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(pipeline));

    println!(
        "{} {} from {}",
        style("Extracting").bold(),
        style(pipeline).cyan(),
        style(input_dir.display()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Scanning filings...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match run_pipeline(pipeline, input_dir, &output_file, policy, |path| {
        pb.set_message(format!("Processing {}", path.display()));
    }) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Filings: {}", summary.documents);
    println!("  Records: {}", summary.records);
    if !summary.failed.is_empty() {
        println!("  Skipped: {}", style(summary.failed.len()).yellow().bold());
        for path in &summary.failed {
            println!("    {}", style(path.display()).dim());
        }
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        summary.output.display()
    );

    Ok(())
}
