//! Page selection: turning user input into requested page numbers.
//!
//! - [`range`] parses selector expressions such as `"1,3-5,7"` against a
//!   document's page count.
//! - [`plan`] holds the ordered per-source requests that the assembler
//!   resolves and writes.
//! - [`diagnostic`] describes the items that were skipped along the way.

pub mod diagnostic;
pub mod plan;
pub mod range;

pub use diagnostic::Diagnostic;
pub use plan::SelectionPlan;
pub use range::{ParsedSelection, parse_page_selection};
