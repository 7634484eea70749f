//! Fixtures shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use crate::error::{PdfPickError, Result};
use crate::io::{LoadedPdf, PageStore, WriteStatistics};

/// Dictionary key carrying a page's fixture tag.
pub const TAG_KEY: &[u8] = b"PdfPickTag";

/// A document with `pages` pages tagged `"{tag}-1"`, `"{tag}-2"`, ...
///
/// MediaBox and Resources live on the page tree root and are inherited by
/// every page.
pub fn tagged_document(tag: &str, pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::with_capacity(pages);
    for n in 1..=pages {
        let label = format!("{tag}-{n}");
        let content = format!("BT /F1 24 Tf 72 720 Td ({label}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "PdfPickTag" => Object::string_literal(label),
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a tagged document to `dir/name` and return its path.
pub fn write_tagged_pdf(dir: &Path, name: &str, tag: &str, pages: usize) -> PathBuf {
    let path = dir.join(name);
    tagged_document(tag, pages).save(&path).unwrap();
    path
}

/// Wrap an in-memory document as if it had been loaded from `name`.
pub fn loaded(name: &str, document: Document) -> Arc<LoadedPdf> {
    let page_count = document.get_pages().len() as u32;
    Arc::new(LoadedPdf {
        document,
        path: PathBuf::from(name),
        page_count,
        load_time: Duration::ZERO,
        file_size: 0,
    })
}

/// The fixture tag of page object `page_id`.
pub fn tag_of(doc: &Document, page_id: ObjectId) -> String {
    let tag = doc
        .get_dictionary(page_id)
        .and_then(|page| page.get(TAG_KEY))
        .and_then(Object::as_str)
        .unwrap();
    String::from_utf8_lossy(tag).into_owned()
}

/// Fixture tags of every page of the PDF at `path`, in page order.
pub fn page_tags(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|id| tag_of(&doc, id))
        .collect()
}

/// In-memory [`PageStore`] that records what it is asked to write.
///
/// Sources are known by path only; opening an unknown path fails like an
/// unreadable PDF would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    page_counts: HashMap<PathBuf, u32>,
    writes: RefCell<Vec<Vec<(PathBuf, u32)>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new(sources: &[(&str, u32)]) -> Self {
        Self {
            page_counts: sources
                .iter()
                .map(|&(path, count)| (PathBuf::from(path), count))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every write fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Pages of the most recent write.
    pub fn written(&self) -> Vec<(PathBuf, u32)> {
        self.writes.borrow().last().cloned().unwrap_or_default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl PageStore for MemoryStore {
    type Source = (PathBuf, u32);
    type Page = (PathBuf, u32);

    async fn open(&self, path: &Path) -> Result<Self::Source> {
        self.page_counts
            .get(path)
            .map(|&count| (path.to_path_buf(), count))
            .ok_or_else(|| PdfPickError::failed_to_load_pdf(path.to_path_buf(), "no such document"))
    }

    fn page_count(&self, source: &Self::Source) -> u32 {
        source.1
    }

    fn page(&self, source: &Self::Source, number: u32) -> Self::Page {
        (source.0.clone(), number)
    }

    async fn write(&self, pages: Vec<Self::Page>, output: &Path) -> Result<WriteStatistics> {
        if self.fail_writes {
            return Err(PdfPickError::FailedToWrite {
                path: output.to_path_buf(),
                source: std::io::Error::other("disk full"),
            });
        }

        let start = Instant::now();
        let page_count = pages.len();
        self.writes.borrow_mut().push(pages);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size: 0,
            output_path: output.to_path_buf(),
            page_count,
            compressed: false,
        })
    }
}
