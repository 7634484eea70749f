//! Page selector expressions.
//!
//! An expression is a comma separated list of tokens:
//! - `"7"` - a single page, kept only when it lies within `1..=page_count`
//! - `"3-5"` - an inclusive range whose endpoints are clamped into
//!   `1..=page_count` before expansion
//!
//! Single pages are rejected when out of bounds while range endpoints are
//! clamped. A range whose start ends up past its end after clamping expands to
//! nothing; endpoints are never swapped.
//!
//! Malformed tokens never abort parsing. Each one is skipped and reported as a
//! [`Diagnostic`].
//!
//! # Examples
//!
//! ```
//! use pdfpick::selection::parse_page_selection;
//!
//! let parsed = parse_page_selection("1,3-5,7", 4);
//! assert_eq!(parsed.pages, vec![1, 3, 4]);
//! assert_eq!(parsed.diagnostics.len(), 1);
//! ```

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::Serialize;

use super::Diagnostic;

/// Outcome of parsing one selector expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedSelection {
    /// Valid pages, strictly ascending and without duplicates.
    pub pages: Vec<u32>,

    /// Tokens that were skipped, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedSelection {
    /// True when no page survived parsing.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Selected pages widened to the plan's request type.
    pub fn requested(&self) -> Vec<i64> {
        self.pages.iter().map(|&page| i64::from(page)).collect()
    }
}

/// Parse a selector expression against a document with `page_count` pages.
///
/// An empty (or all-whitespace) expression selects nothing and reports
/// nothing. Any other empty token, as in `"1,,2"`, is reported as an invalid
/// page number.
pub fn parse_page_selection(expression: &str, page_count: u32) -> ParsedSelection {
    let mut pages = BTreeSet::new();
    let mut diagnostics = Vec::new();

    if expression.trim().is_empty() {
        return ParsedSelection::default();
    }

    for part in expression.split(',') {
        let part = part.trim();

        if part.contains('-') {
            match parse_range(part) {
                Some((start, end)) => pages.extend(clamped_range(start, end, page_count)),
                None => diagnostics.push(Diagnostic::InvalidRange {
                    part: part.to_string(),
                }),
            }
            continue;
        }

        match part.parse::<i64>() {
            Ok(page) if page >= 1 && page <= i64::from(page_count) => {
                // Bounded by page_count above.
                pages.insert(page as u32);
            }
            Ok(page) => diagnostics.push(Diagnostic::PageOutOfRange { page, page_count }),
            Err(_) => diagnostics.push(Diagnostic::InvalidPageNumber {
                part: part.to_string(),
            }),
        }
    }

    ParsedSelection {
        pages: pages.into_iter().collect(),
        diagnostics,
    }
}

/// Split `"a-b"` into exactly two integer endpoints.
fn parse_range(part: &str) -> Option<(i64, i64)> {
    let mut endpoints = part.split('-');
    let start = endpoints.next()?.trim().parse::<i64>().ok()?;
    let end = endpoints.next()?.trim().parse::<i64>().ok()?;

    if endpoints.next().is_some() {
        return None;
    }

    Some((start, end))
}

/// Clamp both endpoints into `1..=page_count` and expand inclusively.
fn clamped_range(start: i64, end: i64, page_count: u32) -> RangeInclusive<u32> {
    if page_count == 0 {
        return RangeInclusive::new(1, 0);
    }

    let max = i64::from(page_count);
    let start = start.clamp(1, max) as u32;
    let end = end.clamp(1, max) as u32;

    start..=end
}
