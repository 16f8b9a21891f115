//! CLI binary for pdf2gitbook.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, picks the conversion mode, and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2gitbook::{convert, convert_pages, AssemblyStyle, ConversionConfig, ConversionOutput};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (writes {title}.md next to the PDF)
  pdf2gitbook document.pdf

  # Choose output directory and document title
  pdf2gitbook document.pdf -o book/ -t "User Guide"

  # One Markdown file per page + SUMMARY.md index (best for long PDFs)
  pdf2gitbook document.pdf --split-pages

  # Enriched layout: author/date frontmatter, TOC icons, footer
  pdf2gitbook document.pdf --style enriched

  # Also emit a cross-file SUMMARY.md for a GitBook project
  pdf2gitbook document.pdf --summary

  # Machine-readable result (paths + stats)
  pdf2gitbook document.pdf --json > result.json

OUTPUT LAYOUT:
  single-document mode      {output_dir}/{title}.md
                            {output_dir}/images/          (when payloads exist)
                            {output_dir}/SUMMARY.md       (with --summary)
  page-split mode           {output_dir}/{title}_pages/SUMMARY.md
                            {output_dir}/{title}_pages/README.md
                            {output_dir}/{title}_pages/sayfa-01.md, sayfa-02.md, …

NOTES:
  Headings are inferred heuristically (all-caps lines, numbered outline
  entries, short unpunctuated phrases); expect occasional false positives on
  short declarative sentences. Blank pages are skipped in page-split mode.
"#;

/// Convert PDF documents to GitBook-compatible Markdown.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2gitbook",
    version,
    about = "Convert PDF documents to GitBook-compatible Markdown",
    long_about = "Convert PDF documents to GitBook-compatible Markdown, reconstructing headings, \
a linked table of contents, tables, and code blocks from the extracted text stream.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path of the PDF file to convert.
    input: PathBuf,

    /// Output directory (default: the PDF's directory).
    #[arg(short, long, env = "PDF2GITBOOK_OUTPUT")]
    output: Option<PathBuf>,

    /// Document title (default: the PDF's file stem).
    #[arg(short, long, env = "PDF2GITBOOK_TITLE")]
    title: Option<String>,

    /// Write one Markdown file per page plus SUMMARY.md and README.md.
    #[arg(long, env = "PDF2GITBOOK_SPLIT_PAGES")]
    split_pages: bool,

    /// Assembly style: minimal, enriched.
    #[arg(long, env = "PDF2GITBOOK_STYLE", value_enum, default_value = "minimal")]
    style: StyleArg,

    /// Also emit a cross-file SUMMARY.md (single-document mode).
    #[arg(long, env = "PDF2GITBOOK_SUMMARY")]
    summary: bool,

    /// Author recorded in the enriched frontmatter.
    #[arg(long, env = "PDF2GITBOOK_AUTHOR", default_value = "pdf2gitbook")]
    author: String,

    /// Output paths and stats as JSON instead of human-readable text.
    #[arg(long, env = "PDF2GITBOOK_JSON")]
    json: bool,

    /// Disable the progress spinner.
    #[arg(long, env = "PDF2GITBOOK_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2GITBOOK_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2GITBOOK_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum StyleArg {
    Minimal,
    Enriched,
}

impl From<StyleArg> for AssemblyStyle {
    fn from(v: StyleArg) -> Self {
        match v {
            StyleArg::Minimal => AssemblyStyle::Minimal,
            StyleArg::Enriched => AssemblyStyle::Enriched,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The spinner carries the user-facing feedback; keep library logs at
    // error level unless the user asks for more.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // ── Build the config ─────────────────────────────────────────────────
    let mut builder = ConversionConfig::builder()
        .style(cli.style.clone().into())
        .emit_summary(cli.summary)
        .author(cli.author.clone());
    if let Some(ref dir) = cli.output {
        builder = builder.output_dir(dir.clone());
    }
    if let Some(ref title) = cli.title {
        builder = builder.title(title.clone());
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run the conversion ───────────────────────────────────────────────
    let spinner = show_progress.then(|| {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(format!("Converting {}…", cli.input.display()));
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    });

    let result = if cli.split_pages {
        convert_pages(&cli.input, &config)
    } else {
        convert(&cli.input, &config)
    };

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let output = result.with_context(|| format!("Conversion of '{}' failed", cli.input.display()))?;

    // ── Report ───────────────────────────────────────────────────────────
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize output")?
        );
    } else if !cli.quiet {
        report_human(&output, cli.split_pages);
    }

    Ok(())
}

fn report_human(output: &ConversionOutput, split_pages: bool) {
    if split_pages {
        println!(
            "✔ {} pages converted ({} blank pages skipped)",
            output.stats.converted_pages, output.stats.skipped_pages
        );
        println!("  index: {}", output.primary_path.display());
        for page in &output.pages {
            println!("  page {:>3}: {}", page.page_num, page.path.display());
        }
    } else {
        println!(
            "✔ Converted {} of {} pages into {}",
            output.stats.converted_pages,
            output.stats.total_pages,
            output.primary_path.display()
        );
        for extra in output.files.iter().skip(1) {
            println!("  also wrote: {}", extra.display());
        }
    }
    if output.stats.images_without_data > 0 {
        println!(
            "  note: {} image(s) had no recoverable payload and were not written",
            output.stats.images_without_data
        );
    }
    println!("  done in {}ms", output.stats.duration_ms);
}
