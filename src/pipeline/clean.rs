//! Whitespace and page-number cleanup.
//!
//! Runs once on the concatenated page text, before heading classification.
//! Extracted PDF text is noisy in predictable ways: ragged blank-line runs,
//! trailing spaces where the layout had gaps, and bare page numbers that
//! survive as their own lines.
//!
//! Leading indentation and in-line runs of 3+ spaces are left alone on
//! purpose: the code-fence pass triggers on 4-space indents and the table
//! pass splits cells on 3+-space gaps, so collapsing them here would blind
//! both downstream heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+").unwrap());
static RE_PAGE_NUMBER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+$").unwrap());

/// Normalise extracted text: trim trailing whitespace per line, collapse
/// blank-line runs to one blank line, blank out lines that are purely a
/// number (page numbers), and trim the whole string.
pub fn clean_text(text: &str) -> String {
    let trimmed: String = text
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    let s = RE_BLANK_RUNS.replace_all(&trimmed, "\n\n");
    let s = RE_PAGE_NUMBER_LINE.replace_all(&s, "");
    s.trim_matches('\n').trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(clean_text("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn trims_trailing_whitespace_per_line() {
        assert_eq!(clean_text("a   \nb\t"), "a\nb");
    }

    #[test]
    fn keeps_leading_indentation() {
        assert_eq!(clean_text("text\n    code line"), "text\n    code line");
    }

    #[test]
    fn keeps_wide_column_gaps() {
        assert_eq!(clean_text("Name       Age"), "Name       Age");
    }

    #[test]
    fn removes_bare_page_numbers() {
        let out = clean_text("intro text\n42\nmore text");
        assert!(!out.contains("42"));
        assert!(out.contains("intro text"));
        assert!(out.contains("more text"));
    }

    #[test]
    fn keeps_numbers_embedded_in_sentences() {
        let out = clean_text("Chapter 42 begins here.");
        assert!(out.contains("42"));
    }

    #[test]
    fn trims_surrounding_blank_lines() {
        assert_eq!(clean_text("\n\n  hello\n\n"), "  hello");
        assert_eq!(clean_text(""), "");
    }
}
