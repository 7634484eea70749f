//! Selections given up front as source indices and page numbers.
//!
//! Page numbers here are plain integers, not range expressions. They are
//! passed through unvalidated and checked by the assembler.

use std::path::{Path, PathBuf};

use crate::assemble::assembler::source_at;
use crate::assemble::{Assembler, ExtractionReport};
use crate::error::{PdfPickError, Result};
use crate::io::PageStore;
use crate::selection::SelectionPlan;

/// Message for command-mode runs missing either list.
pub const MISSING_SELECTION: &str = "In command mode, you must specify both --files and --pages";

/// Plan requesting the same `pages` from every source in `files`.
pub fn build_plan(files: &[i64], pages: &[i64]) -> SelectionPlan {
    SelectionPlan::uniform(files, pages)
}

/// Run a command-mode extraction.
///
/// A single source index extracts straight from that source, keeping the
/// requested order and duplicates. Several indices share one page list and
/// are resolved as a plan, in the order given.
///
/// # Errors
///
/// Returns a usage error if `files` or `pages` is empty, and
/// [`PdfPickError::SourceIndexOutOfRange`] if a lone index addresses no
/// source. Neither case writes anything. I/O failures from the assembler are
/// passed through.
pub async fn run<S: PageStore>(
    assembler: &Assembler<S>,
    sources: &[PathBuf],
    output: &Path,
    files: &[i64],
    pages: &[i64],
) -> Result<ExtractionReport> {
    if files.is_empty() || pages.is_empty() {
        return Err(PdfPickError::usage(MISSING_SELECTION));
    }

    if let [index] = files {
        let source = source_at(sources, *index).ok_or(PdfPickError::SourceIndexOutOfRange {
            index: *index,
            count: sources.len(),
        })?;
        return assembler.extract(source, pages, output).await;
    }

    let plan = build_plan(files, pages);
    log::debug!("command plan: {} source(s), {} request(s)", plan.len(), plan.requested_pages());

    assembler.extract_range(sources, &plan, output).await
}
