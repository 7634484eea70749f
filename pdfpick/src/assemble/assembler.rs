//! Resolving selections against source documents and writing the result.
//!
//! Both entry points run the same one-shot pipeline: validate each request
//! against its source's page count, collect the surviving pages in request
//! order, and hand them to the store as a single output. Requests are never
//! sorted or deduplicated here. Out-of-range pages and source indices are
//! skipped with a [`Diagnostic`]; only I/O failures abort the call.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::io::{PageStore, WriteStatistics};
use crate::selection::{Diagnostic, SelectionPlan};

/// One page of the output, named by where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPage {
    /// Source document path.
    pub source: PathBuf,

    /// 1-based page number within `source`.
    pub page: u32,
}

/// Outcome of one assembly call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    /// Output path the pages were (or would have been) written to.
    pub output: PathBuf,

    /// Number of pages in the output, duplicates included.
    pub pages_written: usize,

    /// The output pages in order.
    pub selected: Vec<SelectedPage>,

    /// Number of sources that contributed at least one page.
    pub sources_used: usize,

    /// Items skipped while resolving, in resolution order.
    pub diagnostics: Vec<Diagnostic>,

    /// Write statistics; `None` for a dry run.
    pub write: Option<WriteStatistics>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl ExtractionReport {
    /// True when nothing valid was selected.
    ///
    /// The output is still written in that case; callers decide how loudly to
    /// report it.
    pub fn is_empty(&self) -> bool {
        self.pages_written == 0
    }
}

/// Pages resolved from a selection, ready to be written.
struct Resolved<P> {
    pages: Vec<P>,
    selected: Vec<SelectedPage>,
    sources_used: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<P> Resolved<P> {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            selected: Vec::new(),
            sources_used: 0,
            diagnostics: Vec::new(),
        }
    }
}

/// Assembles selected pages from source documents into one output.
#[derive(Debug, Clone, Default)]
pub struct Assembler<S> {
    store: S,
    dry_run: bool,
}

impl<S: PageStore> Assembler<S> {
    /// Create an assembler that writes through `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Resolve selections without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The underlying document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Extract `pages` from a single source, in the order given.
    ///
    /// Duplicates are kept and nothing is sorted. Pages outside the source
    /// are skipped with a diagnostic. An empty result is still written.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be opened or the output cannot
    /// be written.
    pub async fn extract(
        &self,
        source: &Path,
        pages: &[i64],
        output: &Path,
    ) -> Result<ExtractionReport> {
        let mut resolved = Resolved::new();
        self.resolve_source(source, pages, &mut resolved).await?;

        self.finish(resolved, output).await
    }

    /// Extract pages from several sources according to `plan`.
    ///
    /// Entries are processed in plan order and pages within an entry in
    /// request order. An entry whose index addresses no element of `sources`
    /// is skipped entirely with a single diagnostic.
    ///
    /// # Errors
    ///
    /// Returns an error if a planned source cannot be opened or the output
    /// cannot be written. No output is produced in either case.
    pub async fn extract_range(
        &self,
        sources: &[PathBuf],
        plan: &SelectionPlan,
        output: &Path,
    ) -> Result<ExtractionReport> {
        let mut resolved = Resolved::new();

        for (index, pages) in plan.iter() {
            match source_at(sources, index) {
                Some(source) => self.resolve_source(source, pages, &mut resolved).await?,
                None => resolved
                    .diagnostics
                    .push(Diagnostic::SourceIndexOutOfRange { index }),
            }
        }

        self.finish(resolved, output).await
    }

    /// Open `source` and append the requested pages that exist in it.
    async fn resolve_source(
        &self,
        source: &Path,
        pages: &[i64],
        resolved: &mut Resolved<S::Page>,
    ) -> Result<()> {
        let opened = self.store.open(source).await?;
        let page_count = self.store.page_count(&opened);
        let before = resolved.pages.len();

        for &page in pages {
            match page_number(page, page_count) {
                Some(number) => {
                    resolved.pages.push(self.store.page(&opened, number));
                    resolved.selected.push(SelectedPage {
                        source: source.to_path_buf(),
                        page: number,
                    });
                }
                None => resolved.diagnostics.push(Diagnostic::PageSkipped {
                    source: source.to_path_buf(),
                    page,
                }),
            }
        }

        let added = resolved.pages.len() - before;
        if added > 0 {
            resolved.sources_used += 1;
        }

        log::debug!(
            "resolved {added} of {} requested page(s) from {} ({page_count} pages)",
            pages.len(),
            source.display()
        );

        Ok(())
    }

    async fn finish(&self, resolved: Resolved<S::Page>, output: &Path) -> Result<ExtractionReport> {
        let pages_written = resolved.pages.len();

        let write = if self.dry_run {
            None
        } else {
            Some(self.store.write(resolved.pages, output).await?)
        };

        Ok(ExtractionReport {
            output: output.to_path_buf(),
            pages_written,
            selected: resolved.selected,
            sources_used: resolved.sources_used,
            diagnostics: resolved.diagnostics,
            write,
            dry_run: self.dry_run,
        })
    }
}

/// The source addressed by `index`, if any.
pub fn source_at(sources: &[PathBuf], index: i64) -> Option<&Path> {
    usize::try_from(index)
        .ok()
        .and_then(|index| sources.get(index))
        .map(PathBuf::as_path)
}

/// `page` as a 1-based page number when it lies within `1..=page_count`.
fn page_number(page: i64, page_count: u32) -> Option<u32> {
    u32::try_from(page)
        .ok()
        .filter(|&number| number >= 1 && number <= page_count)
}
