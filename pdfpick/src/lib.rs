//! pdfpick - Pick pages out of PDF files into a new document.
//!
//! This library resolves human-friendly page selections such as `"1,3-5,7"`
//! against source documents and assembles the chosen pages, from one or many
//! sources, into a single output PDF. It provides:
//!
//! - Page selector parsing with per-token diagnostics
//! - Order-preserving multi-source selection plans
//! - Page assembly through a pluggable document store
//! - Interactive and command-line selection sessions
//!
//! # Examples
//!
//! ## Parsing a Selection
//!
//! ```
//! use pdfpick::selection::parse_page_selection;
//!
//! let parsed = parse_page_selection("1,3-5,7", 10);
//! assert_eq!(parsed.pages, vec![1, 3, 4, 5, 7]);
//! ```
//!
//! ## Extracting Pages From Several Files
//!
//! ```no_run
//! use pdfpick::assemble::Assembler;
//! use pdfpick::io::LopdfStore;
//! use pdfpick::selection::SelectionPlan;
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sources = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//!
//! let mut plan = SelectionPlan::new();
//! plan.append(1, [4]);
//! plan.append(0, [1, 2]);
//!
//! let assembler = Assembler::new(LopdfStore::new());
//! let report = assembler
//!     .extract_range(&sources, &plan, Path::new("picked.pdf"))
//!     .await?;
//! println!("Wrote {} pages", report.pages_written);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod config;
pub mod discovery;
pub mod error;
pub mod io;
pub mod output;
pub mod selection;
pub mod session;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfPickError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
