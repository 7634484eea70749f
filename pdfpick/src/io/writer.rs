//! PDF writing and saving operations.
//!
//! Writes are atomic by default: the document is serialized to a sibling
//! `.tmp` file which is renamed over the target once flushed, so a failed
//! write never leaves a half-written output behind.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpick::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let stats = writer.save(doc, Path::new("output.pdf")).await?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::config::CompressionLevel;
use crate::error::{PdfPickError, Result};
use crate::utils::{file_size_of, format_file_size};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress object streams before writing.
    pub compress: bool,

    /// Renumber objects into a contiguous id range before writing.
    pub renumber: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            renumber: false,
            buffer_size: 8192,
        }
    }
}

impl WriteOptions {
    /// Options matching a compression level.
    pub fn for_compression(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::None => Self {
                compress: false,
                ..Default::default()
            },
            CompressionLevel::Standard => Self::default(),
            CompressionLevel::Maximum => Self {
                renumber: true,
                ..Default::default()
            },
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Number of pages in the written document.
    pub page_count: usize,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// Serialization runs on a blocking task. The document is consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output (or its temp file) cannot be created
    /// - Serialization, flushing or the final rename fails
    pub async fn save(&self, mut doc: Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        let stats = task::spawn_blocking(move || {
            let start = Instant::now();

            if options.compress {
                doc.compress();
            }

            if options.renumber {
                doc.renumber_objects();
            }

            let page_count = doc.get_pages().len();

            let write_path = if options.atomic {
                temp_path_for(&path_buf)
            } else {
                path_buf.clone()
            };

            let file = std::fs::File::create(&write_path).map_err(|e| {
                PdfPickError::FailedToCreateOutput {
                    path: write_path.clone(),
                    source: e,
                }
            })?;

            let written = write_document(&mut doc, file, &write_path, options.buffer_size)
                .and_then(|()| {
                    if options.atomic {
                        std::fs::rename(&write_path, &path_buf).map_err(|e| {
                            PdfPickError::FailedToWrite {
                                path: path_buf.clone(),
                                source: e,
                            }
                        })?;
                    }
                    Ok(())
                });

            if let Err(err) = written {
                // Whatever was created above is incomplete.
                if let Err(e) = std::fs::remove_file(&write_path) {
                    log::debug!("could not remove {}: {e}", write_path.display());
                }
                return Err(err);
            }

            Ok::<_, PdfPickError>(WriteStatistics {
                write_time: start.elapsed(),
                file_size: file_size_of(&path_buf),
                output_path: path_buf,
                page_count,
                compressed: options.compress,
            })
        })
        .await
        .map_err(|e| PdfPickError::other(format!("Write task failed: {e}")))??;

        log::debug!(
            "wrote {} ({} pages, {}) in {:?}",
            stats.output_path.display(),
            stats.page_count,
            stats.format_file_size(),
            stats.write_time
        );

        Ok(stats)
    }
}

/// Serialize `doc` through a buffered writer and flush it.
fn write_document(
    doc: &mut Document,
    file: std::fs::File,
    write_path: &Path,
    buffer_size: usize,
) -> Result<()> {
    let mut writer = std::io::BufWriter::with_capacity(buffer_size, file);

    doc.save_to(&mut writer)
        .map_err(|e| PdfPickError::FailedToWrite {
            path: write_path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

    writer.flush().map_err(|e| PdfPickError::FailedToWrite {
        path: write_path.to_path_buf(),
        source: e,
    })
}

/// Sibling temp path used for atomic writes, e.g. `out.pdf` -> `out.pdf.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
