//! Document assembly: frontmatter + TOC + body → one complete Markdown string.
//!
//! A single [`assemble`] function consumes the [`AssemblyStyle`] tag; the two
//! styles share the TOC renderer and differ only in frontmatter, banner,
//! icons and footer. Also home to the page-split index (`SUMMARY.md`) and
//! landing page (`README.md`) renderers, and the cross-file summary for
//! single-document mode.
//!
//! Everything here is a pure function of its inputs plus a caller-supplied
//! timestamp; no I/O.

use crate::config::AssemblyStyle;
use crate::output::PageFile;
use crate::toc::Toc;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::path::Path;

/// Keyword → emoji icon table for top-level TOC entries in the enriched
/// style. First keyword contained in the lowercased title wins.
const SECTION_ICONS: &[(&str, &str)] = &[
    ("introduction", "📖"),
    ("overview", "📖"),
    ("giriş", "📖"),
    ("install", "🔧"),
    ("setup", "🔧"),
    ("kurulum", "🔧"),
    ("config", "⚙️"),
    ("usage", "💡"),
    ("example", "💡"),
    ("test", "🧪"),
    ("api", "📚"),
    ("reference", "📚"),
    ("security", "🔒"),
    ("summary", "🏁"),
    ("conclusion", "🏁"),
    ("sonuç", "🏁"),
];

/// Icon used when no keyword matches.
const FALLBACK_ICON: &str = "📄";

/// Combine frontmatter, TOC and formatted body into a complete document.
pub fn assemble(
    body: &str,
    title: &str,
    toc: &Toc,
    style: AssemblyStyle,
    author: &str,
    generated_at: DateTime<Local>,
) -> String {
    let mut doc = String::with_capacity(body.len() + 512);

    match style {
        AssemblyStyle::Minimal => {
            let _ = write!(
                doc,
                "---\ntitle: {title}\ndescription: Markdown document converted from PDF\n---\n\n# {title}\n\n"
            );
        }
        AssemblyStyle::Enriched => {
            let _ = write!(
                doc,
                "---\ntitle: {title}\ndescription: Markdown document converted from PDF\nauthor: {author}\ndate: {}\ntags: [pdf, gitbook, markdown]\n---\n\n# {title}\n\n> 📚 Converted from PDF with pdf2gitbook.\n\n",
                generated_at.format("%Y-%m-%d")
            );
        }
    }

    if !toc.is_empty() {
        doc.push_str("## Table of Contents\n\n");
        for entry in toc.entries() {
            let indent = "  ".repeat((entry.level.saturating_sub(2)) as usize);
            match style {
                AssemblyStyle::Enriched if entry.level == 2 => {
                    let _ = writeln!(
                        doc,
                        "- {} [{}](#{})",
                        icon_for(&entry.title),
                        entry.title,
                        entry.anchor
                    );
                }
                _ => {
                    let _ = writeln!(doc, "{indent}- [{}](#{})", entry.title, entry.anchor);
                }
            }
        }
        doc.push_str("\n---\n\n");
    }

    doc.push_str(body);

    if style == AssemblyStyle::Enriched {
        let _ = write!(
            doc,
            "\n\n---\n\n*Generated by pdf2gitbook on {}.*\n",
            generated_at.format("%Y-%m-%d %H:%M")
        );
    }

    doc
}

/// Pick the emoji icon for a top-level section title.
fn icon_for(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    SECTION_ICONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

// ── Page-split artefacts ─────────────────────────────────────────────────

/// Render `SUMMARY.md` for page-split mode: one bullet per produced page,
/// in page-number order.
pub fn render_pages_summary(title: &str, pages: &[PageFile]) -> String {
    let mut out = format!("# {title}\n\n## Table of Contents\n\n");
    for page in pages {
        let filename = file_name(&page.path);
        let _ = writeln!(out, "* [Page {}]({})", page.page_num, filename);
    }
    out
}

/// Render the landing `README.md` for page-split mode.
///
/// Lists the pages actually produced (blank pages are skipped upstream), not
/// a naive `1..=count` range.
pub fn render_pages_readme(
    title: &str,
    pages: &[PageFile],
    generated_at: DateTime<Local>,
) -> String {
    let mut out = format!(
        "# {title}\n\n\
         This folder contains the page-by-page Markdown conversion of **{title}**.\n\n\
         ## Statistics\n\n\
         - **Pages:** {}\n\
         - **Generated:** {}\n\
         - **Format:** GitBook-compatible Markdown\n\n\
         ## Using with GitBook\n\n\
         1. Copy this folder into your GitBook project\n\
         2. Point the book at the generated `SUMMARY.md`\n\
         3. Preview with `gitbook serve`\n\n\
         ## Pages\n\n",
        pages.len(),
        generated_at.format("%Y-%m-%d %H:%M"),
    );
    for page in pages {
        let filename = file_name(&page.path);
        let _ = writeln!(out, "- [Page {:02}]({})", page.page_num, filename);
    }
    out
}

/// Render the cross-file `SUMMARY.md` for single-document mode: one bullet
/// per Markdown file, titled from its stem (`user_guide` → `User Guide`).
pub fn render_single_summary(title: &str, files: &[&Path]) -> String {
    let mut out = format!("# {title}\n\n## Table of Contents\n\n");
    for file in files {
        let filename = file_name(file);
        let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let _ = writeln!(out, "* [{}]({})", stem_to_title(stem), filename);
    }
    out
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// `some_file-name` → `Some File Name`.
fn stem_to_title(stem: &str) -> String {
    stem.replace(['_', '-'], " ")
        .split_whitespace()
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
