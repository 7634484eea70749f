//! Scripted interactive sessions against generated PDFs.

use pdfpick::assemble::Assembler;
use pdfpick::discovery::list_source_documents;
use pdfpick::io::LopdfStore;
use std::io::Cursor;

use crate::common::{Workspace, page_tags};

async fn run_script(ws: &Workspace, script: &str) -> (Option<pdfpick::assemble::ExtractionReport>, String) {
    let sources = list_source_documents(ws.path()).unwrap();
    let assembler = Assembler::new(LopdfStore::new());
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();

    let report = pdfpick::session::interactive::run(
        &assembler,
        &sources,
        &ws.output(),
        &mut input,
        &mut out,
    )
    .await
    .unwrap();

    (report, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_ranges_are_sorted_per_visit_and_accumulate() {
    let ws = Workspace::with_sources(&[("a", 6), ("b", 3)]);

    let (report, transcript) = run_script(&ws, "1\n3,1-2,2\n0\n5-9\n1\n1\n-1\n").await;

    let report = report.unwrap();
    assert_eq!(
        page_tags(&report.output),
        vec!["b-1", "b-2", "b-3", "b-1", "a-5", "a-6"]
    );
    assert!(transcript.contains("File b.pdf has 3 pages."));
    assert!(transcript.contains("Added 3 pages from file 1 to the extraction queue."));
    assert!(transcript.contains("Added 2 pages from file 0 to the extraction queue."));
}

#[tokio::test]
async fn test_reversed_range_selects_nothing() {
    let ws = Workspace::with_sources(&[("a", 10)]);

    let (report, transcript) = run_script(&ws, "0\n5-2\n-1\n").await;

    assert!(transcript.contains("Added 0 pages from file 0 to the extraction queue."));
    assert!(report.unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_tokens_are_reported_and_skipped() {
    let ws = Workspace::with_sources(&[("a", 5)]);

    let (report, transcript) = run_script(&ws, "0\nabc,2,1-x,8\n-1\n").await;

    assert!(transcript.contains("Invalid page number: abc"));
    assert!(transcript.contains("Invalid range: 1-x"));
    assert!(transcript.contains("Warning: Page 8 is out of range (1-5) and will be skipped."));
    assert_eq!(page_tags(&report.unwrap().output), vec!["a-2"]);
}

#[tokio::test]
async fn test_finishing_without_selection_writes_nothing() {
    let ws = Workspace::with_sources(&[("a", 2)]);

    let (report, transcript) = run_script(&ws, "nope\n4\n-1\n").await;

    assert!(report.is_none());
    assert!(transcript.contains("Please enter a valid number."));
    assert!(transcript.contains("Invalid file number!"));
    assert!(!ws.output().exists());
}
