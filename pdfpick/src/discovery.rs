//! Finding the source documents a run can pick pages from.
//!
//! Sources are addressed by their index in the returned list, so the order
//! has to be stable between runs: entries are sorted by file name.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PdfPickError, Result};

/// List the PDF documents directly inside `dir`, sorted by file name.
///
/// Only regular files (after following symlinks) whose name ends in `.pdf`,
/// in any case, are returned. Subdirectories are not descended into.
///
/// # Errors
///
/// Returns [`PdfPickError::ScanFailed`] if the directory cannot be read and
/// [`PdfPickError::NoSourceDocuments`] if it holds no PDF documents.
pub fn list_source_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| PdfPickError::ScanFailed {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        if entry.file_type().is_file() && has_pdf_extension(entry.path()) {
            sources.push(entry.into_path());
        }
    }

    if sources.is_empty() {
        return Err(PdfPickError::NoSourceDocuments {
            dir: dir.to_path_buf(),
        });
    }

    log::debug!("found {} source document(s) in {}", sources.len(), dir.display());

    Ok(sources)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
