//! Result types returned by the conversion entry points.
//!
//! [`ConversionOutput`] is what the caller gets back: the paths that were
//! written plus [`ConversionStats`]. The Markdown itself lives on disk at
//! those paths; the library does not keep the assembled strings around after
//! a successful write.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One written page file in page-split mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFile {
    /// 1-indexed source page number.
    pub page_num: usize,
    /// Title used for that page's document (`"{title} - Page {n}"`).
    pub title: String,
    /// Path of the written Markdown file.
    pub path: PathBuf,
}

/// Counters describing a finished conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Pages that produced output (single-document mode counts every
    /// non-blank page folded into the one document).
    pub converted_pages: usize,
    /// Pages whose extracted text was empty or whitespace-only.
    pub skipped_pages: usize,
    /// Image descriptors that carried no payload data and were not written.
    pub images_without_data: usize,
    /// Wall-clock duration of the whole conversion.
    pub duration_ms: u64,
}

/// Everything a finished conversion produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Primary output: the single document, or the `SUMMARY.md` index in
    /// page-split mode.
    pub primary_path: PathBuf,
    /// Every Markdown file written, in the order it was written.
    pub files: Vec<PathBuf>,
    /// Per-page files (page-split mode only; empty in single-document mode).
    pub pages: Vec<PageFile>,
    /// Conversion counters.
    pub stats: ConversionStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_roundtrip() {
        let stats = ConversionStats {
            total_pages: 3,
            converted_pages: 2,
            skipped_pages: 1,
            images_without_data: 0,
            duration_ms: 42,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: ConversionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.converted_pages, 2);
        assert_eq!(back.skipped_pages, 1);
    }
}
