//! Table reflow: whitespace-delimited columns → GFM pipe rows.
//!
//! PDF extraction flattens tables into lines whose cells are separated by
//! runs of spaces. A line with a 3+-space gap and more than two tokens is
//! treated as a table row; anything narrower is far more likely to be prose
//! with accidental double spaces.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_COLUMN_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{3,}").unwrap());

/// Rewrite column-gap lines as pipe-delimited table rows.
///
/// Cells are the substrings split on 3+-space runs. When the previous line
/// was not itself a table row (or this is the first line), a `| --- |`
/// separator row with one column per cell is inserted directly after, so the
/// first row of each table becomes its header. Other lines pass through
/// unchanged.
pub fn reflow_tables(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut prev_was_row = false;

    for line in text.split('\n') {
        if is_table_row(line) {
            let cells: Vec<&str> = RE_COLUMN_GAP.split(line.trim()).collect();
            out.push(format!("| {} |", cells.join(" | ")));
            if !prev_was_row {
                out.push(format!("| {} |", vec!["---"; cells.len()].join(" | ")));
            }
            prev_was_row = true;
        } else {
            out.push(line.to_string());
            prev_was_row = false;
        }
    }

    out.join("\n")
}

/// A 3+-space gap and more than two whitespace-separated tokens.
fn is_table_row(line: &str) -> bool {
    RE_COLUMN_GAP.is_match(line.trim()) && line.split_whitespace().count() > 2
}
