//! Page-text extraction: the input collaborator boundary.
//!
//! The conversion pipeline never touches PDF internals. It consumes an
//! ordered sequence of [`PageText`] values produced by a [`TextExtractor`],
//! which keeps the structure-inference core testable with hand-written pages
//! and lets callers swap in their own extraction backend.
//!
//! The default implementation, [`PdfTextExtractor`], uses [`pdf_extract`].
//! That library can panic on malformed input rather than returning errors,
//! so the call is wrapped in [`std::panic::catch_unwind`] and panics are
//! converted into [`ConvertError::ExtractionFailed`].
//!
//! Image payloads are a known limitation of text-stream extraction: the
//! descriptors record position and a stable filename, but `data` is usually
//! `None`. Payload-less images are skipped at write time and logged at info
//! level; this is documented behaviour, not an error.

use crate::error::ConvertError;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// An image detected on a page.
///
/// `data` is rarely populated (see module docs); the filename is still useful
/// as a stable reference for manual post-editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// Suggested output filename, e.g. `page_3_img_1.png`.
    pub filename: String,
    /// Raw image bytes, when the extractor could recover them.
    pub data: Option<Vec<u8>>,
}

/// One page of extracted content, immutable after creation.
///
/// Ordering by `page_num` is the document's reading order and is preserved
/// end-to-end through the pipeline.
#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-indexed page number.
    pub page_num: usize,
    /// Raw extracted text for the page (may be empty).
    pub raw_text: String,
    /// Images detected on the page, in encounter order.
    pub images: Vec<PageImage>,
}

impl PageText {
    /// True when the page extracted to nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

/// The input collaborator contract: given a document path, produce an ordered
/// sequence of per-page content.
pub trait TextExtractor {
    /// Extract every page of `path`, in reading order.
    ///
    /// Fails with [`ConvertError::InputNotFound`] when the path does not
    /// resolve to a readable file and [`ConvertError::ExtractionFailed`] when
    /// the document cannot be parsed at all. A page that merely contains no
    /// text is returned as a blank [`PageText`], not an error.
    fn extract(&self, path: &Path) -> Result<Vec<PageText>, ConvertError>;
}

/// Default extractor backed by the [`pdf_extract`] crate.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<PageText>, ConvertError> {
        let data = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConvertError::InputNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConvertError::ExtractionFailed {
                    path: path.to_path_buf(),
                    detail: e.to_string(),
                }
            }
        })?;

        let pages = extract_pages(&data, path)?;

        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageText {
                page_num: i + 1,
                raw_text: text,
                // pdf_extract exposes no image stream access; descriptors
                // stay empty here and payloads are absent by construction.
                images: Vec::new(),
            })
            .collect())
    }
}

/// Run `pdf_extract` behind an unwind boundary (it panics on some inputs).
fn extract_pages(data: &[u8], path: &Path) -> Result<Vec<String>, ConvertError> {
    let owned = data.to_vec();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&owned)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ConvertError::ExtractionFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Err(_) => Err(ConvertError::ExtractionFailed {
            path: path.to_path_buf(),
            detail: "extraction panicked (malformed document)".into(),
        }),
    }
}
