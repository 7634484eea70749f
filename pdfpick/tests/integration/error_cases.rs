//! Integration tests for error handling and edge cases.

use pdfpick::assemble::Assembler;
use pdfpick::discovery::list_source_documents;
use pdfpick::error::PdfPickError;
use pdfpick::io::{LopdfStore, PageStore, PdfReader};
use pdfpick::selection::SelectionPlan;
use pdfpick::session::{command, interactive};
use std::io::Cursor;
use tempfile::TempDir;

use crate::common::{Workspace, page_tags};

#[tokio::test]
async fn test_missing_pages_is_usage_error() {
    let ws = Workspace::with_sources(&[("a", 2)]);
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::new());
    let err = command::run(&assembler, &sources, &output, &[0], &[])
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPickError::Usage { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_no_pdfs_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), b"hello").unwrap();

    let err = list_source_documents(temp_dir.path()).unwrap_err();
    assert!(matches!(err, PdfPickError::NoSourceDocuments { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_corrupted_source_aborts_extraction() {
    let ws = Workspace::with_sources(&[("a", 2)]);
    std::fs::write(ws.path().join("b.pdf"), b"not a pdf").unwrap();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let mut plan = SelectionPlan::new();
    plan.append(0, [1]);
    plan.append(1, [1]);

    let assembler = Assembler::new(LopdfStore::new());
    let err = assembler
        .extract_range(&sources, &plan, &output)
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPickError::FailedToLoadPdf { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_corrupted_source_is_recoverable_interactively() {
    let ws = Workspace::with_sources(&[("a", 2)]);
    std::fs::write(ws.path().join("b.pdf"), b"").unwrap();
    let sources = list_source_documents(ws.path()).unwrap();

    let assembler = Assembler::new(LopdfStore::new());
    let mut input = Cursor::new(b"1\n0\n2\n-1\n".to_vec());
    let mut out = Vec::new();

    let report = interactive::run(&assembler, &sources, &ws.output(), &mut input, &mut out)
        .await
        .unwrap()
        .unwrap();

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Failed to load PDF"));
    assert_eq!(page_tags(&report.output), vec!["a-2"]);
}

#[tokio::test]
async fn test_unwritable_output() {
    let ws = Workspace::with_sources(&[("a", 2)]);
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.path().join("missing").join("out.pdf");

    let assembler = Assembler::new(LopdfStore::new());
    let err = command::run(&assembler, &sources, &output, &[0], &[1])
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPickError::FailedToCreateOutput { .. }));
    assert_eq!(err.exit_code(), 5);
}

#[tokio::test]
async fn test_reader_rejects_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = PdfReader::new()
        .load(&temp_dir.path().join("gone.pdf"))
        .await
        .unwrap_err();

    assert!(matches!(err, PdfPickError::FileNotFound { .. }));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_same_source_opened_twice_is_independent() {
    let ws = Workspace::with_sources(&[("a", 3)]);
    let path = ws.path().join("a.pdf");
    let output = ws.output();

    let store = LopdfStore::new();
    let first = store.open(&path).await.unwrap();
    let second = store.open(&path).await.unwrap();
    let pages = vec![store.page(&first, 1), store.page(&second, 1), store.page(&first, 3)];

    store.write(pages, &output).await.unwrap();
    assert_eq!(page_tags(&output), vec!["a-1", "a-1", "a-3"]);
}
