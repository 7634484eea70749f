//! Non-fatal findings produced while parsing and resolving selections.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A skipped item, reported to the user without aborting the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// A range token whose endpoints are not two integers.
    InvalidRange {
        /// The trimmed token as typed.
        part: String,
    },

    /// A single-page token that is not an integer.
    InvalidPageNumber {
        /// The trimmed token as typed.
        part: String,
    },

    /// A single-page token outside `1..=page_count`.
    #[serde(rename_all = "camelCase")]
    PageOutOfRange {
        /// Requested page.
        page: i64,
        /// Pages in the document.
        page_count: u32,
    },

    /// A planned page that does not exist in its source document.
    PageSkipped {
        /// Source document path.
        source: PathBuf,
        /// Requested page.
        page: i64,
    },

    /// A planned source index that addresses no discovered document.
    SourceIndexOutOfRange {
        /// Requested index.
        index: i64,
    },
}

impl Diagnostic {
    /// True for malformed input tokens, false for well-formed but out-of-range items.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::InvalidPageNumber { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { part } => write!(f, "Invalid range: {part}"),
            Self::InvalidPageNumber { part } => write!(f, "Invalid page number: {part}"),
            Self::PageOutOfRange { page, page_count } => write!(
                f,
                "Warning: Page {page} is out of range (1-{page_count}) and will be skipped."
            ),
            Self::PageSkipped { source, page } => write!(
                f,
                "Warning: Page {page} in file {} is out of range and will be skipped.",
                source.display()
            ),
            Self::SourceIndexOutOfRange { index } => write!(
                f,
                "Warning: File index {index} is out of range and will be skipped."
            ),
        }
    }
}
