//! Error types for the pdf2gitbook library.
//!
//! One enum covers the whole taxonomy, but the variants fall into two camps:
//!
//! * **Fatal** — the conversion cannot proceed or its output is unusable
//!   ([`ConvertError::InputNotFound`], [`ConvertError::ExtractionFailed`],
//!   [`ConvertError::WriteFailed`]). These abort the conversion immediately;
//!   no retry, no cleanup of files already written (re-running is idempotent
//!   per output path).
//!
//! * **Non-fatal to the baseline** — [`ConvertError::EnhancementFailed`].
//!   The baseline document is written before any enhancer runs, so a failed
//!   rewrite leaves a complete, valid result on disk. Callers can log it and
//!   keep the baseline.
//!
//! A blank page in page-split mode is *not* an error at all: it is skipped,
//! logged at info level, and excluded from the page count.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2gitbook library.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// The extraction collaborator could not parse the document.
    #[error("Failed to extract text from '{path}': {detail}\nThe file may be corrupt, encrypted, or not a PDF.")]
    ExtractionFailed { path: PathBuf, detail: String },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create a directory or write an output file.
    #[error("Failed to write output '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Enhancement errors ────────────────────────────────────────────────
    /// The optional external text enhancer failed or returned an invalid
    /// response. The already-written baseline document is untouched.
    #[error("Text enhancement failed for '{title}': {detail}\nThe baseline Markdown document was kept as-is.")]
    EnhancementFailed { title: String, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
