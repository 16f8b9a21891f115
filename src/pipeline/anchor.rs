//! Anchor generation: heading string → URL-safe GitBook slug.
//!
//! A pure, total function. Collision handling is deliberately *not* done
//! here — [`crate::toc::Toc`] owns that, because uniqueness is a property of
//! a document scope, not of a single title.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_NON_ANCHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s-]").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Build a GitBook-compatible anchor from a heading title.
///
/// Steps: transliterate Turkish letters to ASCII, delete everything that is
/// not an ASCII letter, digit, whitespace or hyphen, then trim, lowercase and
/// hyphenate whitespace runs. Total over any input (empty in, empty out) and
/// idempotent under re-application.
///
/// ```rust
/// use pdf2gitbook::make_anchor;
/// assert_eq!(make_anchor("Görüş ve Öneriler"), "gorus-ve-oneriler");
/// assert_eq!(make_anchor("Quick Start!"), "quick-start");
/// ```
pub fn make_anchor(title: &str) -> String {
    let transliterated: String = title.chars().map(transliterate_turkish).collect();
    let stripped = RE_NON_ANCHOR.replace_all(&transliterated, "");
    RE_WHITESPACE
        .replace_all(stripped.trim(), "-")
        .to_lowercase()
}

/// Fixed Turkish-alphabet transliteration table; everything else is identity.
fn transliterate_turkish(c: char) -> char {
    match c {
        'ç' => 'c',
        'ğ' => 'g',
        'ı' => 'i',
        'ö' => 'o',
        'ş' => 's',
        'ü' => 'u',
        'Ç' => 'C',
        'Ğ' => 'G',
        'İ' => 'I',
        'Ö' => 'O',
        'Ş' => 'S',
        'Ü' => 'U',
        other => other,
    }
}
