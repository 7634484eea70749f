//! Console-driven selection.
//!
//! The user repeatedly picks a source by index and enters a range expression
//! for it. Each expression is parsed against that source's page count and
//! appended to the source's entry, so visiting a source twice accumulates.
//! `-1` (or end of input) finishes the loop. Bad input is reported and the
//! user is prompted again.
//!
//! Input and output are generic so the flow can be driven from tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::assemble::assembler::source_at;
use crate::assemble::{Assembler, ExtractionReport};
use crate::error::Result;
use crate::io::PageStore;
use crate::selection::{SelectionPlan, parse_page_selection};
use crate::utils::display_name;

/// Source index that ends the selection loop.
pub const FINISH: i64 = -1;

/// What the user entered at the source prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceChoice {
    Finish,
    Index(i64),
    NotANumber,
}

fn parse_choice(line: &str) -> SourceChoice {
    match line.trim().parse::<i64>() {
        Ok(FINISH) => SourceChoice::Finish,
        Ok(index) => SourceChoice::Index(index),
        Err(_) => SourceChoice::NotANumber,
    }
}

/// Run an interactive session and extract what was selected.
///
/// Returns `None` without writing anything if no source was ever selected.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written, or if the
/// final extraction fails.
pub async fn run<S, R, W>(
    assembler: &Assembler<S>,
    sources: &[PathBuf],
    output: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<Option<ExtractionReport>>
where
    S: PageStore,
    R: BufRead,
    W: Write,
{
    let plan = collect_plan(assembler.store(), sources, input, out).await?;

    if plan.is_empty() {
        writeln!(out, "No pages selected for extraction.")?;
        return Ok(None);
    }

    let report = assembler.extract_range(sources, &plan, output).await?;
    Ok(Some(report))
}

/// Prompt for sources and range expressions until the user finishes.
///
/// Source failures such as an unreadable PDF are reported and the user is
/// prompted again; only console I/O errors end the session early.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub async fn collect_plan<S, R, W>(
    store: &S,
    sources: &[PathBuf],
    input: &mut R,
    out: &mut W,
) -> Result<SelectionPlan>
where
    S: PageStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "PDF Files found:")?;
    for (index, source) in sources.iter().enumerate() {
        writeln!(out, "{index}: {}", display_name(source))?;
    }

    let mut plan = SelectionPlan::new();

    loop {
        let Some(line) = prompt(
            input,
            out,
            "\nEnter the file number to extract from (or -1 to finish): ",
        )?
        else {
            break;
        };

        let index = match parse_choice(&line) {
            SourceChoice::Finish => break,
            SourceChoice::NotANumber => {
                writeln!(out, "Please enter a valid number.")?;
                continue;
            }
            SourceChoice::Index(index) => index,
        };

        let Some(source) = source_at(sources, index) else {
            writeln!(out, "Invalid file number!")?;
            continue;
        };

        let opened = match store.open(source).await {
            Ok(opened) => opened,
            Err(e) if e.is_recoverable() => {
                writeln!(out, "{e}")?;
                continue;
            }
            Err(e) => return Err(e),
        };
        let page_count = store.page_count(&opened);
        writeln!(out, "File {} has {page_count} pages.", display_name(source))?;

        let expression = prompt(
            input,
            out,
            "Enter page numbers to extract (e.g., '1,3-5,7'): ",
        )?
        .unwrap_or_default();

        let selection = parse_page_selection(&expression, page_count);
        for diagnostic in &selection.diagnostics {
            writeln!(out, "{diagnostic}")?;
        }

        let added = selection.pages.len();
        plan.append(index, selection.requested());
        writeln!(
            out,
            "Added {added} pages from file {index} to the extraction queue."
        )?;

        log::debug!("queued {added} page(s) from {}", source.display());
    }

    Ok(plan)
}

/// Print `message` and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
