//! Conversion entry points: one PDF → one document, or one PDF → N pages.
//!
//! Both entry points run the same sequential pipeline per document scope:
//!
//! ```text
//! extract → concatenate → clean → classify → fence → tables → [decorate] → assemble → write
//! ```
//!
//! Each call owns its state (a fresh [`Toc`] per document scope), so a
//! caller may run independent conversions concurrently without any shared
//! mutable state leaking between them. In page-split mode the per-page scope
//! guarantees a page's TOC contains only that page's headings.
//!
//! Fatal errors ([`ConvertError::InputNotFound`],
//! [`ConvertError::ExtractionFailed`], [`ConvertError::WriteFailed`]) abort
//! immediately with no cleanup of files already written; re-running the same
//! conversion overwrites each output path, so partial runs are harmless.

use crate::assemble::{assemble, render_pages_readme, render_pages_summary, render_single_summary};
use crate::config::{AssemblyStyle, ConversionConfig};
use crate::error::ConvertError;
use crate::extract::{PageImage, PdfTextExtractor, TextExtractor};
use crate::output::{ConversionOutput, ConversionStats, PageFile};
use crate::pipeline::{clean, codeblocks, decorate, headings, tables};
use crate::toc::Toc;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Convert a PDF to a single GitBook Markdown document.
///
/// Writes `{output_dir}/{title}.md`, an `images/` directory when any image
/// payloads were recovered, and (with `config.emit_summary`) a cross-file
/// `SUMMARY.md`.
///
/// # Errors
/// Fatal only: missing input, unparseable document, unwritable output.
pub fn convert(
    input: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    convert_with(&PdfTextExtractor, input, config)
}

/// [`convert`] with a caller-supplied extraction collaborator.
pub fn convert_with(
    extractor: &dyn TextExtractor,
    input: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let start = Instant::now();
    let input = input.as_ref();
    info!("Starting conversion: {}", input.display());

    // ── Step 1: Extract pages ────────────────────────────────────────────
    let pages = extractor.extract(input)?;
    let total_pages = pages.len();
    info!("Extracted {} pages", total_pages);

    // ── Step 2: Resolve title and output directory ───────────────────────
    let title = resolve_title(input, config);
    let output_dir = resolve_output_dir(input, config);

    // ── Step 3: Concatenate non-blank pages with boundary markers ────────
    let mut full_text = String::new();
    let mut images: Vec<PageImage> = Vec::new();
    let mut skipped = 0usize;
    for page in &pages {
        if page.is_blank() {
            debug!("Page {} is blank, folding over", page.page_num);
            skipped += 1;
        } else {
            full_text.push_str(&format!("\n\n<!-- Page {} -->\n\n", page.page_num));
            full_text.push_str(&page.raw_text);
        }
        images.extend(page.images.iter().cloned());
    }

    // ── Step 4: Run the structure-inference pipeline ─────────────────────
    info!("Processing text");
    let mut toc = Toc::new();
    let body = run_pipeline(&full_text, &mut toc, config.style);

    // ── Step 5: Assemble and write the document ──────────────────────────
    info!("Assembling GitBook document");
    let document = assemble(
        &body,
        &title,
        &toc,
        config.style,
        &config.author,
        chrono::Local::now(),
    );
    let doc_path = output_dir.join(format!("{title}.md"));
    write_file(&doc_path, &document)?;
    let mut files = vec![doc_path.clone()];

    // ── Step 6: Write recovered images ───────────────────────────────────
    let images_without_data = write_images(&images, &output_dir)?;

    // ── Step 7: Optional cross-file SUMMARY.md ───────────────────────────
    if config.emit_summary {
        let summary = render_single_summary(&title, &[doc_path.as_path()]);
        let summary_path = output_dir.join("SUMMARY.md");
        write_file(&summary_path, &summary)?;
        files.push(summary_path);
    }

    let stats = ConversionStats {
        total_pages,
        converted_pages: total_pages - skipped,
        skipped_pages: skipped,
        images_without_data,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Conversion complete: {} -> {} ({}ms)",
        input.display(),
        doc_path.display(),
        stats.duration_ms
    );

    Ok(ConversionOutput {
        primary_path: doc_path,
        files,
        pages: Vec::new(),
        stats,
    })
}

/// Convert a PDF to one Markdown document per non-blank page, plus a
/// `SUMMARY.md` index and a `README.md` landing page.
///
/// Output lands in `{output_dir}/{title}_pages/`, page files named
/// `sayfa-NN.md` (zero-padded). Blank pages are skipped entirely: not
/// written, not counted, not listed.
pub fn convert_pages(
    input: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    convert_pages_with(&PdfTextExtractor, input, config)
}

/// [`convert_pages`] with a caller-supplied extraction collaborator.
pub fn convert_pages_with(
    extractor: &dyn TextExtractor,
    input: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let start = Instant::now();
    let input = input.as_ref();
    info!("Starting page-split conversion: {}", input.display());

    // ── Step 1: Extract pages ────────────────────────────────────────────
    let pages = extractor.extract(input)?;
    let total_pages = pages.len();

    // ── Step 2: Resolve title and the pages folder ───────────────────────
    let title = resolve_title(input, config);
    let folder = resolve_output_dir(input, config).join(format!("{title}_pages"));
    info!("Writing pages into {}", folder.display());

    // ── Step 3: Per-page pipeline, fresh TOC scope each time ─────────────
    let mut page_files: Vec<PageFile> = Vec::new();
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped = 0usize;

    for page in &pages {
        if page.is_blank() {
            info!("Page {} is blank, skipping", page.page_num);
            skipped += 1;
            continue;
        }

        let mut toc = Toc::new();
        let body = run_pipeline(&page.raw_text, &mut toc, config.style);
        let page_title = format!("{title} - Page {}", page.page_num);
        let document = assemble(
            &body,
            &page_title,
            &toc,
            config.style,
            &config.author,
            chrono::Local::now(),
        );

        let path = folder.join(format!("sayfa-{:02}.md", page.page_num));
        write_file(&path, &document)?;
        debug!("Page {} written: {}", page.page_num, path.display());

        files.push(path.clone());
        page_files.push(PageFile {
            page_num: page.page_num,
            title: page_title,
            path,
        });
    }

    // ── Step 4: Index and landing page ───────────────────────────────────
    let now = chrono::Local::now();
    let summary_path = folder.join("SUMMARY.md");
    write_file(&summary_path, &render_pages_summary(&title, &page_files))?;
    files.push(summary_path.clone());

    let readme_path = folder.join("README.md");
    write_file(&readme_path, &render_pages_readme(&title, &page_files, now))?;
    files.push(readme_path);

    let stats = ConversionStats {
        total_pages,
        converted_pages: page_files.len(),
        skipped_pages: skipped,
        images_without_data: pages
            .iter()
            .flat_map(|p| &p.images)
            .filter(|i| i.data.is_none())
            .count(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Page-split conversion complete: {} pages written, {} skipped ({}ms)",
        stats.converted_pages, stats.skipped_pages, stats.duration_ms
    );

    Ok(ConversionOutput {
        primary_path: summary_path,
        files,
        pages: page_files,
        stats,
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// The shared structure-inference pipeline for one document scope.
///
/// Stage order is fixed: headings first (on cleaned text), then fences, then
/// tables, then — only for the enriched style — inline decoration. Each later
/// pass would misread the insertions of the ones after it.
fn run_pipeline(raw_text: &str, toc: &mut Toc, style: AssemblyStyle) -> String {
    let cleaned = clean::clean_text(raw_text);
    let with_headings = headings::classify_headings(&cleaned, toc);
    let fenced = codeblocks::fence_indented_blocks(&with_headings);
    let tabled = tables::reflow_tables(&fenced);
    match style {
        AssemblyStyle::Minimal => tabled,
        AssemblyStyle::Enriched => decorate::decorate(&tabled),
    }
}

/// Config title, falling back to the input's file stem.
fn resolve_title(input: &Path, config: &ConversionConfig) -> String {
    config
        .title
        .clone()
        .or_else(|| {
            input
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "document".to_string())
}

/// Config output dir, falling back to the input's parent directory.
fn resolve_output_dir(input: &Path, config: &ConversionConfig) -> PathBuf {
    config.output_dir.clone().unwrap_or_else(|| {
        let parent = input.parent().unwrap_or_else(|| Path::new("."));
        if parent.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            parent.to_path_buf()
        }
    })
}

/// Write a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConvertError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| ConvertError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write image payloads into `{output_dir}/images/`, returning how many
/// descriptors carried no data.
///
/// Text-stream extraction rarely recovers payloads; descriptors without data
/// are logged at info level and skipped — documented behaviour, not an error.
fn write_images(images: &[PageImage], output_dir: &Path) -> Result<usize, ConvertError> {
    let mut without_data = 0usize;
    let with_data: Vec<&PageImage> = images
        .iter()
        .filter(|img| {
            if img.data.is_none() {
                without_data += 1;
                info!("Image {} has no payload data, skipping", img.filename);
                false
            } else {
                true
            }
        })
        .collect();

    if with_data.is_empty() {
        return Ok(without_data);
    }

    let images_dir = output_dir.join("images");
    std::fs::create_dir_all(&images_dir).map_err(|e| ConvertError::WriteFailed {
        path: images_dir.clone(),
        source: e,
    })?;
    for img in with_data {
        let path = images_dir.join(&img.filename);
        let data = img.data.as_deref().unwrap_or_default();
        std::fs::write(&path, data).map_err(|e| ConvertError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
        debug!("Image written: {}", path.display());
    }
    Ok(without_data)
}
