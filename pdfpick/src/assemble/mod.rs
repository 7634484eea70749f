//! Turning selections into an output document.
//!
//! [`Assembler`] validates requested pages against their sources and collects
//! them in order; [`compose`] builds the lopdf document the store writes.

pub mod assembler;
pub mod compose;

pub use assembler::{Assembler, ExtractionReport, SelectedPage};
