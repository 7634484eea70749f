//! Output formatting and display for pdfpick.
//!
//! This module handles all user-facing output of the CLI: status messages,
//! the source listing, skipped-item warnings and the final extraction
//! summary. Interactive prompts are written by the session itself.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpick::output::OutputFormatter;
//! use pdfpick::config::Config;
//!
//! # fn example(config: Config) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Scanning for PDF files");
//! formatter.success("Extraction completed successfully");
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use std::path::PathBuf;

use crate::assemble::ExtractionReport;
use crate::selection::Diagnostic;
use crate::utils::display_name;

/// Message shown when a run selected nothing but still wrote its output.
pub const EMPTY_SELECTION_WARNING: &str =
    "No valid pages were selected; wrote an empty document";

/// Display the numbered list of discovered source documents.
pub fn display_sources(formatter: &OutputFormatter, sources: &[PathBuf]) {
    formatter.section("Available PDF files:");
    for (index, source) in sources.iter().enumerate() {
        formatter.info(&format!("{index}: {}", display_name(source)));
    }
}

/// Display skipped items as warnings.
pub fn display_diagnostics(formatter: &OutputFormatter, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        formatter.warning(&diagnostic.to_string());
    }
}

/// Display the outcome of an extraction.
pub fn display_report(formatter: &OutputFormatter, report: &ExtractionReport) {
    display_diagnostics(formatter, &report.diagnostics);

    if report.dry_run {
        formatter.section("Dry run - no output written");
        for (index, selected) in report.selected.iter().enumerate() {
            formatter.list_item(
                index + 1,
                &format!("{} page {}", display_name(&selected.source), selected.page),
            );
        }
        formatter.info(&format!(
            "Would write {} page(s) from {} file(s) to {}",
            report.pages_written,
            report.sources_used,
            report.output.display()
        ));
        return;
    }

    if report.is_empty() {
        formatter.warning(EMPTY_SELECTION_WARNING);
        return;
    }

    formatter.success(&format!(
        "Extracted {} page(s) from {} file(s) to {}",
        report.pages_written,
        report.sources_used,
        report.output.display()
    ));

    if let Some(write) = &report.write {
        formatter.detail("Size", &write.format_file_size());
        formatter.detail(
            "Write time",
            &format!("{:.2}s", write.write_time.as_secs_f64()),
        );
        formatter.detail("Compressed", if write.compressed { "yes" } else { "no" });
    }
}
