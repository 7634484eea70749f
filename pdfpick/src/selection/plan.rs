//! Ordered per-source page requests.
//!
//! The plan's iteration order is the order in which source indices were first
//! added, and it decides the page order of the output document. Indices are
//! neither sorted nor required to be contiguous, and they are not validated
//! until the assembler resolves the plan.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

/// Requested pages keyed by source index, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionPlan {
    entries: IndexMap<i64, Vec<i64>>,
}

impl SelectionPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan that requests the same pages from every listed source.
    ///
    /// A source listed twice keeps its first position.
    pub fn uniform(sources: &[i64], pages: &[i64]) -> Self {
        let mut plan = Self::new();
        for &source in sources {
            plan.entries.insert(source, pages.to_vec());
        }
        plan
    }

    /// Append requests to a source's entry, creating it at the end if new.
    ///
    /// Earlier requests for the same source are kept, so a source visited
    /// twice accumulates both contributions in visiting order.
    pub fn append(&mut self, source: i64, pages: impl IntoIterator<Item = i64>) {
        match self.entries.entry(source) {
            Entry::Occupied(mut entry) => entry.get_mut().extend(pages),
            Entry::Vacant(entry) => {
                entry.insert(pages.into_iter().collect());
            }
        }
    }

    /// Iterate entries in plan order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[i64])> {
        self.entries
            .iter()
            .map(|(&source, pages)| (source, pages.as_slice()))
    }

    /// Requested pages for one source.
    pub fn pages_for(&self, source: i64) -> Option<&[i64]> {
        self.entries.get(&source).map(Vec::as_slice)
    }

    /// Number of source entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no source has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of page requests across all entries.
    pub fn requested_pages(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
