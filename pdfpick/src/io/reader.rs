//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpick::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf")).await?;
//! println!("{} has {} pages", loaded.path.display(), loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{PdfPickError, Result};
use crate::utils::{file_size_of, format_file_size};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: u32,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len() as u32;
        let file_size = file_size_of(&path);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }

    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Loads source documents from disk.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// Parsing runs on a blocking task. Documents without pages load fine and
    /// report a page count of zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist or is a directory
    /// - File is not a valid PDF
    /// - PDF is encrypted
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        Self::check_path_exists(path)?;

        let path_buf = path.to_path_buf();
        let start = Instant::now();

        let document = task::spawn_blocking({
            let path_buf = path_buf.clone();
            move || Document::load(&path_buf)
        })
        .await
        .map_err(|e| PdfPickError::other(format!("Load task failed: {e}")))?
        .map_err(|e| {
            let err_msg = e.to_string();
            if err_msg.contains("encrypt") || err_msg.contains("password") {
                PdfPickError::encrypted_pdf(path_buf.clone())
            } else {
                PdfPickError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        let loaded = LoadedPdf::new(document, path_buf, start.elapsed());
        log::debug!(
            "loaded {} ({} pages, {}) in {:?}",
            loaded.path.display(),
            loaded.page_count,
            loaded.format_file_size(),
            loaded.load_time
        );

        Ok(loaded)
    }

    /// Check that `path` exists and is not a directory.
    pub fn check_path_exists(path: &Path) -> Result<()> {
        let exists = path.try_exists()?;
        if !exists {
            return Err(PdfPickError::file_not_found(path.to_path_buf()));
        }

        if path.is_dir() {
            return Err(PdfPickError::failed_to_load_pdf(
                path.to_path_buf(),
                "path is a directory",
            ));
        }

        Ok(())
    }
}
