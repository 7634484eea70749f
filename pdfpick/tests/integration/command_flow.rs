//! End-to-end command-mode extractions against generated PDFs.

use pdfpick::assemble::Assembler;
use pdfpick::config::CompressionLevel;
use pdfpick::discovery::list_source_documents;
use pdfpick::io::LopdfStore;
use pdfpick::selection::Diagnostic;
use pdfpick::session::command;
use rstest::rstest;

use crate::common::{Workspace, page_tags};

fn workspace() -> Workspace {
    Workspace::with_sources(&[("a", 5), ("b", 2), ("c", 6)])
}

#[tokio::test]
async fn test_single_file_keeps_order_and_duplicates() {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::new());
    let report = command::run(&assembler, &sources, &output, &[0], &[3, 1, 3])
        .await
        .unwrap();

    assert_eq!(report.pages_written, 3);
    assert_eq!(page_tags(&output), vec!["a-3", "a-1", "a-3"]);
}

#[tokio::test]
async fn test_multiple_files_share_page_list() {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::new());
    let report = command::run(&assembler, &sources, &output, &[2, 0], &[1, 6])
        .await
        .unwrap();

    assert_eq!(page_tags(&output), vec!["c-1", "c-6", "a-1"]);
    assert_eq!(report.sources_used, 2);
    assert_eq!(report.diagnostics.len(), 1);
    assert!(matches!(
        &report.diagnostics[0],
        Diagnostic::PageSkipped { page: 6, source } if source.ends_with("a.pdf")
    ));
}

#[tokio::test]
async fn test_plan_order_across_sources() {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let mut plan = pdfpick::selection::SelectionPlan::new();
    plan.append(0, [1, 2]);
    plan.append(2, [4]);

    let assembler = Assembler::new(LopdfStore::new());
    assembler
        .extract_range(&sources, &plan, &output)
        .await
        .unwrap();

    assert_eq!(page_tags(&output), vec!["a-1", "a-2", "c-4"]);
}

#[tokio::test]
async fn test_out_of_range_file_index_is_skipped() {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::new());
    let report = command::run(&assembler, &sources, &output, &[1, 9], &[2])
        .await
        .unwrap();

    assert_eq!(page_tags(&output), vec!["b-2"]);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::SourceIndexOutOfRange { index: 9 }]
    );
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
#[tokio::test]
async fn test_compression_levels_produce_same_pages(#[case] level: CompressionLevel) {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::with_compression(level));
    let report = command::run(&assembler, &sources, &output, &[1], &[2, 1])
        .await
        .unwrap();

    assert_eq!(page_tags(&output), vec!["b-2", "b-1"]);
    let write = report.write.unwrap();
    assert_eq!(write.compressed, level != CompressionLevel::None);
    assert!(write.file_size > 0);
}

#[tokio::test]
async fn test_no_valid_pages_writes_empty_document() {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::new());
    let report = command::run(&assembler, &sources, &output, &[1], &[7, 0])
        .await
        .unwrap();

    assert!(report.is_empty());
    assert!(output.exists());
    assert!(page_tags(&output).is_empty());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::new()).dry_run(true);
    let report = command::run(&assembler, &sources, &output, &[0, 2], &[2])
        .await
        .unwrap();

    assert!(report.dry_run);
    assert!(report.write.is_none());
    assert_eq!(report.pages_written, 2);
    assert!(report.selected[1].source.ends_with("c.pdf"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_report_serializes_to_json() {
    let ws = workspace();
    let sources = list_source_documents(ws.path()).unwrap();
    let output = ws.output();

    let assembler = Assembler::new(LopdfStore::new());
    let report = command::run(&assembler, &sources, &output, &[0, 5], &[1])
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["pagesWritten"], 1);
    assert_eq!(json["diagnostics"][0]["kind"], "sourceIndexOutOfRange");
    assert_eq!(json["write"]["pageCount"], 1);
}
