//! Document I/O.
//!
//! - [`reader`] loads source documents.
//! - [`writer`] serializes the assembled document to disk.
//! - [`store`] exposes both through the [`PageStore`] collaborator the
//!   assembler works against.

pub mod reader;
pub mod store;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use store::{LopdfStore, PageHandle, PageStore};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
