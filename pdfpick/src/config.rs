//! Configuration module for pdfpick.
//!
//! This module turns CLI arguments into a validated configuration that drives
//! a picking run. It handles:
//! - Validation of argument combinations
//! - Application of defaults
//! - Parsing of mode and compression names

use anyhow::{Result, bail};

use crate::PdfPickError;
use std::{path::PathBuf, str::FromStr};

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT: &str = "extracted_document.pdf";

/// How selections are gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Prompt for source indices and page expressions on the console.
    #[default]
    Interactive,
    /// Take source indices and page numbers from the command line.
    Command,
}

impl FromStr for Mode {
    type Err = PdfPickError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "interactive" => Ok(Self::Interactive),
            "command" => Ok(Self::Command),
            _ => Err(PdfPickError::InvalidConfig {
                message: format!("Invalid mode: {s}. Must be one of: interactive, command"),
            }),
        }
    }
}

/// Compression level for the output PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - preserves exact quality and structure.
    None,
    /// Balanced compression - good trade-off between size and processing time.
    #[default]
    Standard,
    /// Compression plus object renumbering for the smallest cross-reference table.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = PdfPickError;

    /// Parse compression level from "none", "standard", or "maximum".
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(PdfPickError::InvalidConfig {
                message: format!(
                    "Invalid compression level: {s}. Must be one of: none, standard, maximum"
                ),
            }),
        }
    }
}

/// Output file overwrite behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Prompt the user before overwriting (default).
    #[default]
    Prompt,
    /// Always overwrite without prompting.
    Force,
    /// Never overwrite, error if file exists.
    NoClobber,
}

/// Complete configuration for one picking run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for source documents.
    pub directory: PathBuf,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Selection mode.
    pub mode: Mode,

    /// Source indices (command mode only).
    pub files: Vec<i64>,

    /// Page numbers applied to every listed source (command mode only).
    pub pages: Vec<i64>,

    /// File overwrite behavior.
    pub overwrite_mode: OverwriteMode,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Resolve and report without writing the output.
    pub dry_run: bool,

    /// Compression level for output.
    pub compression: CompressionLevel,

    /// Print the extraction report as JSON.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: Mode::default(),
            files: Vec::new(),
            pages: Vec::new(),
            overwrite_mode: OverwriteMode::default(),
            quiet: false,
            verbose: false,
            dry_run: false,
            compression: CompressionLevel::default(),
            json: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// Checks for logical inconsistencies and invalid combinations. Missing
    /// `--files`/`--pages` in command mode is not checked here; that is a
    /// usage error raised by the command session itself.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - `--files` or `--pages` are given in interactive mode
    /// - `--json` is given in interactive mode
    /// - The output path is an existing directory
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if self.mode == Mode::Interactive && (!self.files.is_empty() || !self.pages.is_empty()) {
            bail!("--files and --pages are only valid with --mode command");
        }

        if self.mode == Mode::Interactive && self.json {
            bail!("--json is only valid with --mode command");
        }

        if self.output.is_dir() {
            bail!(
                "Output path is a directory: {}",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Check if output should be displayed.
    ///
    /// Returns false if in quiet mode and not doing a dry run.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}
