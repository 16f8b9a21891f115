//! Inline decoration, applied only by the enriched assembly style.
//!
//! Four cosmetic rewrites over the already-structured text:
//!
//! 1. image references gain an italic caption line,
//! 2. a fixed table of domain terms is wrapped in bold / inline-code,
//! 3. `Not:` / `NOTE:` lines become blockquote callouts,
//! 4. bare URLs become self-referencing Markdown links.
//!
//! Rules 2–4 skip lines inside code fences (this pass runs after fencing, so
//! fences already exist). All rules are total over arbitrary text; the worst
//! case is a cosmetically odd but structurally valid document.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_IMAGE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
// A character that may precede a linkable URL: start of line or anything
// that is not already Markdown link syntax.
static RE_BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(^|[^(\[<"])(https?://[^\s<>)\]]+)"#).unwrap());

/// Fixed domain-term table: product names get bold, file/command names get
/// inline code.
const BOLD_TERMS: &[&str] = &["GitBook", "Markdown", "PDF"];
const CODE_TERMS: &[&str] = &["SUMMARY.md", "README.md", "gitbook serve"];

/// Precompiled whole-word matchers for every term, paired with its marker.
static TERM_MATCHERS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    let compile = |term: &str, marker: &str| {
        // A term counts as whole-word when not glued to word characters and
        // not already inside backtick/asterisk markup.
        let pattern = format!(r"(^|[^\w`*]){}($|[^\w`*])", regex::escape(term));
        (
            Regex::new(&pattern).expect("term pattern is valid"),
            format!("{marker}{term}{marker}"),
        )
    };
    CODE_TERMS
        .iter()
        .map(|t| compile(t, "`"))
        .chain(BOLD_TERMS.iter().map(|t| compile(t, "**")))
        .collect()
});

/// Apply all enriched-style inline decorations.
pub fn decorate(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in text.split('\n') {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            out.push(line.to_string());
            continue;
        }
        if in_fence {
            out.push(line.to_string());
            continue;
        }

        let line = rewrite_callout(line);
        let line = emphasise_terms(&line);
        let line = autolink_urls(&line);
        out.push(line);
    }

    expand_image_captions(&out.join("\n"))
}

// ── Rule 1: image captions ───────────────────────────────────────────────

/// `![alt](url)` → the same reference followed by an italic caption line.
fn expand_image_captions(text: &str) -> String {
    RE_IMAGE_REF
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let alt = caps[1].trim();
            let url = &caps[2];
            if alt.is_empty() {
                caps[0].to_string()
            } else {
                format!("![{alt}]({url})\n\n*Figure: {alt}*")
            }
        })
        .to_string()
}

// ── Rule 2: domain-term markup ───────────────────────────────────────────

fn emphasise_terms(line: &str) -> String {
    let mut s = line.to_string();
    for (re, marked) in TERM_MATCHERS.iter() {
        s = re
            .replace_all(&s, |caps: &regex::Captures<'_>| {
                format!("{}{marked}{}", &caps[1], &caps[2])
            })
            .to_string();
    }
    s
}

// ── Rule 3: note callouts ────────────────────────────────────────────────

/// `Not:` (Turkish) and `NOTE:` prefixes become blockquote callouts.
fn rewrite_callout(line: &str) -> String {
    let trimmed = line.trim_start();
    for prefix in ["Not:", "NOTE:"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return format!("> **Note:** {}", rest.trim_start());
        }
    }
    line.to_string()
}

// ── Rule 4: bare URL autolinking ─────────────────────────────────────────

fn autolink_urls(line: &str) -> String {
    RE_BARE_URL
        .replace_all(line, |caps: &regex::Captures<'_>| {
            let prefix = &caps[1];
            let url = &caps[2];
            format!("{prefix}[{url}]({url})")
        })
        .to_string()
}
