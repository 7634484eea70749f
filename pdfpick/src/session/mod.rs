//! Gathering selections from the user and running the extraction.
//!
//! Two flows feed the same [`Assembler`](crate::assemble::Assembler):
//! [`interactive`] builds a plan from console prompts, [`command`] from
//! source indices and page numbers given on the command line.

pub mod command;
pub mod interactive;
