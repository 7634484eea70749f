//! CLI argument parsing for pdfpick.
//!
//! This module defines the command-line interface structure using `clap`.
//! It is also compiled by the build script to render the man page, so it
//! only depends on the library crate.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use pdfpick::config::{CompressionLevel, Config, DEFAULT_OUTPUT, Mode, OverwriteMode};
use pdfpick::error::{PdfPickError, Result};

/// Extract pages from PDF files and create a new document.
///
/// pdfpick lists the PDF files of a directory and copies the selected pages,
/// from one or several of them, into a single output PDF. Pages are chosen
/// interactively with range expressions such as "1,3-5,7", or given directly
/// on the command line.
#[derive(Parser, Debug)]
#[command(name = "pdfpick")]
#[command(version)]
#[command(about = "Extract pages from PDF files and create a new document", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Directory containing PDF files
    ///
    /// Files ending in .pdf (any case) directly inside this directory are
    /// listed in name order. Their position in that list is the file index
    /// used by --files and by the interactive prompt.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output PDF file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Run in interactive mode or command mode
    ///
    /// - interactive: prompt for file numbers and page ranges (default)
    /// - command: take --files and --pages from the command line
    #[arg(short, long, value_name = "MODE", default_value = "interactive")]
    #[arg(value_parser = ["interactive", "command"])]
    pub mode: String,

    /// Indices of files to process (command mode)
    ///
    /// With a single index, pages are copied in the order given, duplicates
    /// included. With several, the same --pages list is applied to each
    /// file in turn.
    ///
    /// Example:
    ///   pdfpick --mode command --files 0 2 --pages 1 3
    #[arg(long, value_name = "INDEX", num_args = 1.., allow_negative_numbers = true)]
    pub files: Vec<i64>,

    /// Page numbers to extract (command mode, 1-based)
    #[arg(long, value_name = "PAGE", num_args = 1.., allow_negative_numbers = true)]
    pub pages: Vec<i64>,

    /// Force overwrite of existing output file without confirmation
    ///
    /// By default, pdfpick will prompt before overwriting an existing file.
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite existing output file
    ///
    /// If the output file already exists, exit with an error
    /// instead of prompting or overwriting.
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show debug logging and write statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Dry run - resolve the selection without creating output
    ///
    /// Opens the selected files, checks every requested page and prints
    /// the pages that would be written.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Compression level for output PDF
    ///
    /// - none: No compression
    /// - standard: Compress content streams (default)
    /// - maximum: Compress and renumber objects into a compact table
    #[arg(short, long, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Print the extraction report as JSON on stdout (command mode)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode or compression level is invalid, or if
    /// configuration validation fails.
    pub fn to_config(&self) -> Result<Config> {
        let mode = Mode::from_str(&self.mode)?;
        let compression = CompressionLevel::from_str(&self.compression)?;

        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        let config = Config {
            directory: self.dir.clone(),
            output: self.output.clone(),
            mode,
            files: self.files.clone(),
            pages: self.pages.clone(),
            overwrite_mode,
            quiet: self.quiet,
            verbose: self.verbose,
            dry_run: self.dry_run,
            compression,
            json: self.json,
        };

        config.validate().map_err(|e| {
            PdfPickError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }
}
