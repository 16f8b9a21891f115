//! # pdf2gitbook
//!
//! Convert PDF documents to GitBook-compatible Markdown.
//!
//! ## Why this crate?
//!
//! Extracted PDF text is a flat character stream: headings, tables, code
//! listings and the table of contents are all visually encoded and lost by
//! extraction. This crate reconstructs that structure with deterministic
//! lexical heuristics — shouted lines become headings, wide column gaps
//! become tables, deep indentation becomes fenced code — and assembles a
//! complete GitBook document with frontmatter, a linked table of contents
//! and stable anchors.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Extract   per-page text via the TextExtractor collaborator
//!  ├─ 2. Clean     collapse blank runs, drop bare page numbers
//!  ├─ 3. Classify  heading heuristics, accumulating the TOC
//!  ├─ 4. Format    code fences, table reflow, inline decoration
//!  ├─ 5. Assemble  frontmatter + TOC + body (minimal or enriched)
//!  └─ 6. Write     one document, or one file per page + SUMMARY + README
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2gitbook::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .output_dir("out")
//!         .build()?;
//!     let output = convert("document.pdf", &config)?;
//!     println!("written: {}", output.primary_path.display());
//!     eprintln!(
//!         "{} pages converted, {} skipped",
//!         output.stats.converted_pages, output.stats.skipped_pages
//!     );
//!     Ok(())
//! }
//! ```
//!
//! Use [`convert_pages`] for page-split mode (one Markdown file per PDF page
//! plus a `SUMMARY.md` index), the layout GitBook handles best for long
//! documents.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2gitbook` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2gitbook = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod assemble;
pub mod config;
pub mod convert;
pub mod enhance;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod toc;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{AssemblyStyle, ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_pages, convert_pages_with, convert_with};
pub use enhance::{apply_enhancement, EnhanceError, TextEnhancer};
pub use error::ConvertError;
pub use extract::{PageImage, PageText, PdfTextExtractor, TextExtractor};
pub use output::{ConversionOutput, ConversionStats, PageFile};
pub use pipeline::anchor::make_anchor;
pub use toc::{Toc, TocEntry};
