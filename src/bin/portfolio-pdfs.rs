//! Portfolio PDFs CLI tool
//!
//! Reads `screenshots/*.png` and writes the portfolio PDFs into `pdfs/`.

use std::io;
use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use portfolio_pdfs::{build_portfolio, BuildObserver, Error, PortfolioConfig};

/// Portfolio PDFs - Merge screenshots into portfolio PDFs
#[derive(Parser)]
#[command(name = "portfolio-pdfs")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Reads screenshots/*.png from the working directory and writes
complete-showcase.pdf, key-features.pdf, admin-features.pdf and
student-features.pdf into pdfs/. Groups with no images are skipped.")]
struct Cli {}

/// Prints the per-group status lines
struct ConsoleObserver;

impl BuildObserver for ConsoleObserver {
    fn on_group_start(&mut self, output: &Path, image_count: usize) {
        println!("Creating {} with {} images...", output.display(), image_count);
    }

    fn on_decode_error(&mut self, _path: &Path, error: &Error) {
        eprintln!("{}", error);
    }

    fn on_group_saved(&mut self, output: &Path, _pages: usize) {
        println!("Saved: {}", output.display());
    }
}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = PortfolioConfig::default();

    match build_portfolio(&config, &mut ConsoleObserver) {
        Ok(report) => {
            tracing::debug!(
                "Built {} of {} PDFs from {} images",
                report.written().len(),
                report.groups.len(),
                report.discovered
            );
            Ok(())
        }
        Err(Error::NoImagesFound(_)) => {
            println!("No images found!");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to build PDFs from {} into {}",
                config.input_dir.display(),
                config.output_dir.display()
            )
        }),
    }
}
