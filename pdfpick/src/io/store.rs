//! The document collaborator the assembler resolves selections against.
//!
//! [`PageStore`] is the seam between page selection and document I/O. The
//! assembler only ever asks four things of it: open a source, count its
//! pages, hand out a page, and write an ordered list of pages as one output.
//! [`LopdfStore`] backs it with real PDF files.

use std::path::Path;
use std::sync::Arc;

use crate::assemble::compose::compose_document;
use crate::config::CompressionLevel;
use crate::error::Result;
use crate::io::{LoadedPdf, PdfReader, PdfWriter, WriteOptions, WriteStatistics};

/// Document I/O as seen by the assembler.
///
/// Sources are opened on demand and never cached by callers; opening the
/// same path twice yields two independent sources.
#[allow(async_fn_in_trait)]
pub trait PageStore {
    /// An opened source document.
    type Source;

    /// An opaque reference to one page of a source.
    type Page;

    /// Open the document at `path`.
    async fn open(&self, path: &Path) -> Result<Self::Source>;

    /// Number of pages in `source`.
    fn page_count(&self, source: &Self::Source) -> u32;

    /// Page `number` (1-based) of `source`.
    ///
    /// Callers guarantee `1 <= number <= page_count(source)`.
    fn page(&self, source: &Self::Source, number: u32) -> Self::Page;

    /// Write `pages`, in order, as a single document at `output`.
    async fn write(&self, pages: Vec<Self::Page>, output: &Path) -> Result<WriteStatistics>;
}

/// One page of a loaded source document.
#[derive(Debug, Clone)]
pub struct PageHandle {
    /// The document the page belongs to.
    pub source: Arc<LoadedPdf>,

    /// 1-based page number within `source`.
    pub number: u32,
}

/// [`PageStore`] backed by lopdf documents on disk.
#[derive(Debug, Clone, Default)]
pub struct LopdfStore {
    reader: PdfReader,
    writer: PdfWriter,
}

impl LopdfStore {
    /// Create a store with default write options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that writes with the given compression level.
    pub fn with_compression(level: CompressionLevel) -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::with_options(WriteOptions::for_compression(level)),
        }
    }
}

impl PageStore for LopdfStore {
    type Source = Arc<LoadedPdf>;
    type Page = PageHandle;

    async fn open(&self, path: &Path) -> Result<Self::Source> {
        self.reader.load(path).await.map(Arc::new)
    }

    fn page_count(&self, source: &Self::Source) -> u32 {
        source.page_count
    }

    fn page(&self, source: &Self::Source, number: u32) -> Self::Page {
        PageHandle {
            source: Arc::clone(source),
            number,
        }
    }

    async fn write(&self, pages: Vec<Self::Page>, output: &Path) -> Result<WriteStatistics> {
        let document = compose_document(&pages)?;
        self.writer.save(document, output).await
    }
}
