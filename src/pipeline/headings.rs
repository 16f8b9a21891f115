//! Heading classification: the heart of the structure-inference engine.
//!
//! PDFs carry no semantic markup for headings, so three lexical heuristics
//! approximate the visual conventions of technical documents:
//!
//! 1. shouted titles (`INTRODUCTION`) → level-2,
//! 2. numbered outline entries (`3. Kurulum`) → level-3,
//! 3. short unpunctuated phrases (`Quick Start`) → level-4.
//!
//! First match wins; a line matching none passes through as a body line.
//! Rule 3 will fire on short declarative sentences and rule 1 on uppercase
//! body text (legal boilerplate, acronym-heavy lines) — accepted trade-offs
//! of heuristic classification, pinned by the tests below rather than
//! "fixed" by guessing stricter intent.

use crate::toc::Toc;
use once_cell::sync::Lazy;
use regex::Regex;

// Digits, optional period, whitespace, then an uppercase letter (Turkish
// uppercase letters included).
static RE_NUMBERED_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.?\s+[A-ZÇĞIİÖŞÜ]").unwrap());

/// Rewrite heading-shaped lines as Markdown headings, appending one TOC
/// entry per detected heading in encounter order.
///
/// Classification looks at the whitespace-trimmed line; body lines are
/// emitted unchanged (indentation intact, for the code-fence pass that runs
/// next). Blank lines pass through as blank lines and reset nothing.
pub fn classify_headings(text: &str, toc: &mut Toc) -> String {
    let mut out: Vec<String> = Vec::new();

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            out.push(String::new());
            continue;
        }

        if is_all_caps_heading(line) {
            let title = title_case(line);
            toc.push(2, title.clone());
            out.push(format!("## {title}"));
        } else if RE_NUMBERED_HEADING.is_match(line) {
            toc.push(3, line);
            out.push(format!("### {line}"));
        } else if is_short_declarative_heading(line) {
            toc.push(4, line);
            out.push(format!("#### {line}"));
        } else {
            out.push(raw.to_string());
        }
    }

    out.join("\n")
}

/// Rule 1: length > 5, contains letters, none of them lowercase.
///
/// Purely numeric lines have no letters and are excluded by the first check.
fn is_all_caps_heading(line: &str) -> bool {
    line.chars().count() > 5
        && line.chars().any(char::is_alphabetic)
        && !line.chars().any(char::is_lowercase)
}

/// Rule 3: short, starts uppercase, no terminal `.`/`,`, at most 10 words.
fn is_short_declarative_heading(line: &str) -> bool {
    line.chars().count() < 100
        && line.chars().next().is_some_and(char::is_uppercase)
        && !line.ends_with('.')
        && !line.ends_with(',')
        && line.split_whitespace().count() <= 10
}

/// Title-case a shouted heading: first letter of each word uppercase, the
/// rest lowercase.
fn title_case(line: &str) -> String {
    line.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
