//! qbtally - answer line frequency tally for quiz bowl packets
//!
//! Scans the configured packet directories for question documents
//! (.docx, .doc, .pdf), extracts every "ANSWER:" line and prints a
//! frequency-sorted report:
//!
//!   qbtally                   Use ./config.toml
//!   qbtally -c other.toml     Use a different config file
//!   qbtally --quiet           No progress bars

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use qbtally_core::{report, scan_directories, DocFormat, Frequencies};
use std::io;
use std::path::PathBuf;

mod config;

#[derive(Parser)]
#[command(name = "qbtally")]
#[command(about = "Tally ANSWER: lines across quiz bowl packets")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load_config(&cli.config)?;

    let base = config.packet_base(&cli.config);
    if !base.is_dir() {
        anyhow::bail!("could not find the packet directory: {}", base.display());
    }

    let scan = scan_directories(&config.packet_paths(&cli.config));
    for skipped in &scan.skipped {
        eprintln!(
            "Could not read {}: {}",
            skipped.path.display(),
            skipped.error
        );
    }

    let mut frequencies = Frequencies::new();
    for format in DocFormat::SCAN_ORDER {
        process_bucket(format, scan.documents.bucket(format), &mut frequencies, cli);
    }

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &frequencies)?;
    Ok(())
}

/// Run one format's extractor over its bucket, folding each file's
/// answers into the tally. A file that fails is reported and skipped;
/// the batch continues.
fn process_bucket(
    format: DocFormat,
    paths: &[PathBuf],
    frequencies: &mut Frequencies,
    cli: &Cli,
) {
    if paths.is_empty() {
        return;
    }

    if !cli.quiet {
        eprintln!("Parsing {} files.....", format.label());
    }

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
        );
        pb
    };

    for path in paths {
        match qbtally_core::extract_file(format, path) {
            Ok(answers) => frequencies.extend(answers),
            Err(e) => {
                pb.suspend(|| {
                    eprintln!("{} {}: {e}", "Failed to parse".red(), path.display());
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();
}
