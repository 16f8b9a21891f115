//! End-to-end integration tests for pdf2gitbook.
//!
//! The conversion session is driven through a stub [`TextExtractor`], so the
//! whole pipeline — cleanup, heading classification, structural formatting,
//! assembly, file layout — is exercised against hand-written page text with
//! no PDF fixtures and no external collaborators.

use pdf2gitbook::{
    apply_enhancement, convert_pages_with, convert_with, AssemblyStyle, ConversionConfig,
    ConvertError, EnhanceError, PageImage, PageText, TextEnhancer, TextExtractor,
};
use std::path::Path;
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────

/// Extractor returning canned pages regardless of the input path.
struct StubExtractor {
    pages: Vec<PageText>,
}

impl StubExtractor {
    fn from_texts(texts: &[&str]) -> Self {
        Self {
            pages: texts
                .iter()
                .enumerate()
                .map(|(i, t)| PageText {
                    page_num: i + 1,
                    raw_text: t.to_string(),
                    images: Vec::new(),
                })
                .collect(),
        }
    }
}

impl TextExtractor for StubExtractor {
    fn extract(&self, _path: &Path) -> Result<Vec<PageText>, ConvertError> {
        Ok(self.pages.clone())
    }
}

/// Extractor that always fails to parse.
struct BrokenExtractor;

impl TextExtractor for BrokenExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<PageText>, ConvertError> {
        Err(ConvertError::ExtractionFailed {
            path: path.to_path_buf(),
            detail: "stub parse failure".into(),
        })
    }
}

fn config_in(dir: &TempDir) -> ConversionConfig {
    ConversionConfig::builder()
        .output_dir(dir.path())
        .title("Manual")
        .build()
        .unwrap()
}

fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("read {}: {e}", path.as_ref().display()))
}

// ── Single-document mode ─────────────────────────────────────────────────

#[test]
fn single_document_round_trip() {
    let dir = TempDir::new().unwrap();
    let extractor = StubExtractor::from_texts(&["OVERVIEW\n\nSome body text."]);

    let output = convert_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();

    assert_eq!(output.primary_path, dir.path().join("Manual.md"));
    let doc = read(&output.primary_path);
    assert!(doc.contains("## Overview"), "got:\n{doc}");
    assert!(doc.contains("- [Overview](#overview)"), "got:\n{doc}");
    assert!(doc.contains("Some body text."), "got:\n{doc}");
    assert_eq!(output.stats.total_pages, 1);
    assert_eq!(output.stats.converted_pages, 1);
}

#[test]
fn single_document_spans_all_pages_with_one_toc() {
    let dir = TempDir::new().unwrap();
    let extractor = StubExtractor::from_texts(&["FIRST CHAPTER\n\nalpha.", "SECOND CHAPTER\n\nbeta."]);

    let output = convert_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();
    let doc = read(&output.primary_path);

    // Both pages land in one document, in reading order, with page markers.
    let first = doc.find("## First Chapter").expect("first heading");
    let second = doc.find("## Second Chapter").expect("second heading");
    assert!(first < second);
    assert!(doc.contains("<!-- Page 1 -->"));
    assert!(doc.contains("<!-- Page 2 -->"));

    // One shared TOC holds both headings.
    assert!(doc.contains("- [First Chapter](#first-chapter)"));
    assert!(doc.contains("- [Second Chapter](#second-chapter)"));
}

#[test]
fn tables_and_code_blocks_are_reconstructed() {
    let dir = TempDir::new().unwrap();
    // Table rows start lowercase so heading rule 3 (uppercase first letter)
    // does not claim them before the table pass runs — the same precedence a
    // real mixed-content page is subject to.
    let page = "a paragraph of regular prose that stays a body line, yes.\n\
                \nname       age       city\n\
                john       25        new york\n\
                \nanother plain paragraph before some code follows here, ok.\n\
                \n    fn main() {}\n    println!(\"hi\");\n\
                \ntrailing prose line to close the indented run, all done.";
    let extractor = StubExtractor::from_texts(&[page]);

    let output = convert_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();
    let doc = read(&output.primary_path);

    assert!(doc.contains("| name | age | city |\n| --- | --- | --- |"), "got:\n{doc}");
    assert!(doc.contains("| john | 25 | new york |"));
    assert!(doc.contains("```\nfn main() {}\nprintln!(\"hi\");\n```"), "got:\n{doc}");
}

#[test]
fn emit_summary_writes_cross_file_index() {
    let dir = TempDir::new().unwrap();
    let config = ConversionConfig::builder()
        .output_dir(dir.path())
        .title("user_guide")
        .emit_summary(true)
        .build()
        .unwrap();
    let extractor = StubExtractor::from_texts(&["INTRO\n\nwords."]);

    let output = convert_with(&extractor, "input.pdf", &config).unwrap();

    let summary = read(dir.path().join("SUMMARY.md"));
    assert!(summary.contains("* [User Guide](user_guide.md)"), "got:\n{summary}");
    assert_eq!(output.files.len(), 2);
}

#[test]
fn images_without_payload_are_not_written() {
    let dir = TempDir::new().unwrap();
    let extractor = StubExtractor {
        pages: vec![PageText {
            page_num: 1,
            raw_text: "CONTENT\n\nbody.".into(),
            images: vec![
                PageImage {
                    filename: "page_1_img_1.png".into(),
                    data: None,
                },
                PageImage {
                    filename: "page_1_img_2.png".into(),
                    data: Some(vec![0x89, 0x50, 0x4E, 0x47]),
                },
            ],
        }],
    };

    let output = convert_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();

    assert_eq!(output.stats.images_without_data, 1);
    let images_dir = dir.path().join("images");
    assert!(images_dir.join("page_1_img_2.png").is_file());
    assert!(!images_dir.join("page_1_img_1.png").exists());
}

#[test]
fn extraction_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = convert_with(&BrokenExtractor, "input.pdf", &config_in(&dir)).unwrap_err();
    assert!(matches!(err, ConvertError::ExtractionFailed { .. }));
    assert!(!dir.path().join("Manual.md").exists());
}

#[test]
fn missing_input_is_input_not_found_with_real_extractor() {
    let dir = TempDir::new().unwrap();
    let err = pdf2gitbook::convert("/definitely/not/here.pdf", &config_in(&dir)).unwrap_err();
    assert!(matches!(err, ConvertError::InputNotFound { .. }));
}

// ── Page-split mode ──────────────────────────────────────────────────────

#[test]
fn blank_page_is_skipped_and_index_lists_produced_pages() {
    let dir = TempDir::new().unwrap();
    let extractor =
        StubExtractor::from_texts(&["PAGE ONE TITLE\n\nalpha.", "   \n\t\n", "PAGE THREE TITLE\n\ngamma."]);

    let output = convert_pages_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();

    let folder = dir.path().join("Manual_pages");
    assert!(folder.join("sayfa-01.md").is_file());
    assert!(!folder.join("sayfa-02.md").exists());
    assert!(folder.join("sayfa-03.md").is_file());

    assert_eq!(output.stats.total_pages, 3);
    assert_eq!(output.stats.converted_pages, 2);
    assert_eq!(output.stats.skipped_pages, 1);

    // The index lists exactly the produced pages, in page-number order.
    let summary = read(folder.join("SUMMARY.md"));
    let page_lines: Vec<&str> = summary.lines().filter(|l| l.starts_with("* [Page")).collect();
    assert_eq!(
        page_lines,
        ["* [Page 1](sayfa-01.md)", "* [Page 3](sayfa-03.md)"]
    );
}

#[test]
fn page_toc_state_does_not_leak_across_pages() {
    let dir = TempDir::new().unwrap();
    let extractor = StubExtractor::from_texts(&["ALPHA SECTION\n\none.", "BETA SECTION\n\ntwo."]);

    convert_pages_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();

    let folder = dir.path().join("Manual_pages");
    let page2 = read(folder.join("sayfa-02.md"));
    assert!(page2.contains("- [Beta Section](#beta-section)"));
    // Page 1's heading must not contaminate page 2's TOC.
    assert!(!page2.contains("Alpha Section"), "got:\n{page2}");
}

#[test]
fn page_files_carry_per_page_titles_and_readme_summarises() {
    let dir = TempDir::new().unwrap();
    let extractor = StubExtractor::from_texts(&["SOLO PAGE\n\ntext."]);

    let output = convert_pages_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();

    let folder = dir.path().join("Manual_pages");
    let page = read(folder.join("sayfa-01.md"));
    assert!(page.contains("# Manual - Page 1"), "got:\n{page}");

    let readme = read(folder.join("README.md"));
    assert!(readme.contains("- **Pages:** 1"));
    assert!(readme.contains("- [Page 01](sayfa-01.md)"));

    assert_eq!(output.pages.len(), 1);
    assert_eq!(output.pages[0].title, "Manual - Page 1");
}

// ── Enriched style ───────────────────────────────────────────────────────

#[test]
fn enriched_style_decorates_and_adds_frontmatter() {
    let dir = TempDir::new().unwrap();
    let config = ConversionConfig::builder()
        .output_dir(dir.path())
        .title("Manual")
        .style(AssemblyStyle::Enriched)
        .author("docs-team")
        .build()
        .unwrap();
    let extractor = StubExtractor::from_texts(&[
        "INSTALLATION GUIDE\n\nNOTE: read this first.\nVisit https://example.org for updates.",
    ]);

    let output = convert_with(&extractor, "input.pdf", &config).unwrap();
    let doc = read(&output.primary_path);

    assert!(doc.contains("author: docs-team"));
    assert!(doc.contains("tags: [pdf, gitbook, markdown]"));
    assert!(doc.contains("- 🔧 [Installation Guide](#installation-guide)"), "got:\n{doc}");
    assert!(doc.contains("> **Note:** read this first."));
    assert!(doc.contains("[https://example.org](https://example.org)"));
    assert!(doc.contains("*Generated by pdf2gitbook on "));
}

#[test]
fn minimal_style_leaves_body_undecorated() {
    let dir = TempDir::new().unwrap();
    let extractor =
        StubExtractor::from_texts(&["NOTE: this stays as plain text in minimal mode, yes."]);

    let output = convert_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();
    let doc = read(&output.primary_path);
    assert!(!doc.contains("> **Note:**"));
    assert!(!doc.contains("Generated by pdf2gitbook"));
}

// ── Enhancement collaborator ─────────────────────────────────────────────

struct PrefixEnhancer;
impl TextEnhancer for PrefixEnhancer {
    fn rewrite(&self, markdown: &str, _title: &str) -> Result<String, EnhanceError> {
        Ok(format!("<!-- polished -->\n{markdown}"))
    }
}

struct OfflineEnhancer;
impl TextEnhancer for OfflineEnhancer {
    fn rewrite(&self, _markdown: &str, _title: &str) -> Result<String, EnhanceError> {
        Err(EnhanceError("connection refused".into()))
    }
}

#[test]
fn enhancement_runs_after_baseline_and_overwrites() {
    let dir = TempDir::new().unwrap();
    let extractor = StubExtractor::from_texts(&["CHAPTER\n\ncontent."]);
    let output = convert_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();

    apply_enhancement(&PrefixEnhancer, &output.primary_path, "Manual").unwrap();
    let doc = read(&output.primary_path);
    assert!(doc.starts_with("<!-- polished -->"));
    assert!(doc.contains("## Chapter"));
}

#[test]
fn failed_enhancement_keeps_baseline_document() {
    let dir = TempDir::new().unwrap();
    let extractor = StubExtractor::from_texts(&["CHAPTER\n\ncontent."]);
    let output = convert_with(&extractor, "input.pdf", &config_in(&dir)).unwrap();
    let baseline = read(&output.primary_path);

    let err = apply_enhancement(&OfflineEnhancer, &output.primary_path, "Manual").unwrap_err();
    assert!(matches!(err, ConvertError::EnhancementFailed { .. }));
    assert_eq!(read(&output.primary_path), baseline);
}
