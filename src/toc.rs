//! Table-of-contents accumulation.
//!
//! The TOC is an explicit [`Toc`] value created at the start of each
//! document scope and threaded through the pipeline: the heading classifier
//! pushes entries, the assembler reads them, and dropping the value ends the
//! scope. There is no hidden session state to reset between pages —
//! page-split mode simply builds a fresh `Toc` per page.

use crate::pipeline::anchor::make_anchor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One heading reference, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level: 2, 3 or 4.
    pub level: u8,
    /// Heading text as it appears in the document.
    pub title: String,
    /// URL-safe fragment the TOC bullet links to.
    pub anchor: String,
}

/// Ordered list of heading references for one document scope.
///
/// Entries are only ever appended, never removed or reordered.
#[derive(Debug, Default, Clone)]
pub struct Toc {
    entries: Vec<TocEntry>,
    // Occurrences per base slug, for collision disambiguation.
    seen: HashMap<String, usize>,
}

impl Toc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading, computing a collision-free anchor.
    ///
    /// Two distinct titles can transliterate to the same slug (`"Görev"` and
    /// `"Gorev"` both become `gorev`). The second occurrence gets `-1`, the
    /// third `-2`, and so on, matching the suffixes GitBook itself assigns to
    /// duplicate heading ids, so TOC links still resolve after rendering.
    pub fn push(&mut self, level: u8, title: impl Into<String>) {
        let title = title.into();
        let base = make_anchor(&title);
        let n = self.seen.entry(base.clone()).or_insert(0);
        let anchor = if *n == 0 {
            base.clone()
        } else {
            format!("{base}-{n}")
        };
        *n += 1;
        self.entries.push(TocEntry {
            level,
            title,
            anchor,
        });
    }

    /// Entries in encounter order.
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_encounter_order() {
        let mut toc = Toc::new();
        toc.push(2, "Overview");
        toc.push(3, "1. Setup");
        toc.push(4, "Quick Start");
        let levels: Vec<u8> = toc.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, [2, 3, 4]);
    }

    #[test]
    fn duplicate_titles_get_numeric_suffixes() {
        let mut toc = Toc::new();
        toc.push(2, "Summary");
        toc.push(2, "Summary");
        toc.push(2, "Summary");
        let anchors: Vec<&str> = toc.entries().iter().map(|e| e.anchor.as_str()).collect();
        assert_eq!(anchors, ["summary", "summary-1", "summary-2"]);
    }

    #[test]
    fn transliteration_collisions_are_disambiguated() {
        let mut toc = Toc::new();
        toc.push(2, "Görev");
        toc.push(2, "Gorev");
        let anchors: Vec<&str> = toc.entries().iter().map(|e| e.anchor.as_str()).collect();
        assert_eq!(anchors, ["gorev", "gorev-1"]);
    }
}
