//! pdfpick - Extract pages from PDF files into a new document.
//!
//! Lists the PDF files of a directory, gathers a page selection interactively
//! or from the command line, and writes the selected pages as one PDF.

mod cli;

use clap::Parser;
use std::io::{self, Write};
use std::process;

use crate::cli::Cli;
use pdfpick::assemble::{Assembler, ExtractionReport};
use pdfpick::config::{Config, Mode, OverwriteMode};
use pdfpick::discovery::list_source_documents;
use pdfpick::error::PdfPickError;
use pdfpick::io::LopdfStore;
use pdfpick::output::{OutputFormatter, display_report, display_sources};
use pdfpick::session::{command, interactive};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Install the logger. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfPickError> {
    let config = cli.to_config()?;
    let formatter = OutputFormatter::from_config(&config);

    if formatter.should_print() && !config.json {
        formatter.section(&format!("{} v{}", pdfpick::NAME, pdfpick::VERSION));
    }

    let sources = list_source_documents(&config.directory)?;
    log::debug!("sources: {sources:?}");

    if !config.dry_run {
        handle_output_overwrite(&config, &formatter)?;
    }

    let store = LopdfStore::with_compression(config.compression);
    let assembler = Assembler::new(store).dry_run(config.dry_run);

    let report = match config.mode {
        Mode::Interactive => {
            let mut input = io::stdin().lock();
            let mut out = io::stdout();
            interactive::run(&assembler, &sources, &config.output, &mut input, &mut out).await?
        }
        Mode::Command => {
            if formatter.is_verbose() {
                display_sources(&formatter, &sources);
            }
            let report = command::run(
                &assembler,
                &sources,
                &config.output,
                &config.files,
                &config.pages,
            )
            .await?;
            Some(report)
        }
    };

    if let Some(report) = report {
        print_report(&config, &formatter, &report)?;
    }

    Ok(())
}

/// Print the outcome as JSON or as formatted text.
fn print_report(
    config: &Config,
    formatter: &OutputFormatter,
    report: &ExtractionReport,
) -> Result<(), PdfPickError> {
    if config.json {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| PdfPickError::other(format!("Failed to serialize report: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    formatter.blank_line();
    display_report(formatter, report);
    Ok(())
}

/// Handle output file overwrite scenarios.
fn handle_output_overwrite(config: &Config, formatter: &OutputFormatter) -> Result<(), PdfPickError> {
    if !config.output.exists() {
        return Ok(());
    }

    match config.overwrite_mode {
        OverwriteMode::Force => Ok(()),
        OverwriteMode::NoClobber => Err(PdfPickError::output_exists(config.output.clone())),
        OverwriteMode::Prompt => {
            // In quiet mode, treat as no-clobber
            if formatter.is_quiet() {
                return Err(PdfPickError::output_exists(config.output.clone()));
            }

            formatter.warning(&format!(
                "Output file already exists: {}",
                config.output.display()
            ));

            print!("Overwrite? [y/N]: ");
            io::stdout().flush().ok();

            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .map_err(|err| PdfPickError::other(format!("Failed to read input: {err}")))?;

            let response = response.trim().to_lowercase();
            if response == "y" || response == "yes" {
                Ok(())
            } else {
                Err(PdfPickError::Cancelled)
            }
        }
    }
}
