//! Configuration types for PDF-to-GitBook conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs across independent conversion sessions and to
//! diff two runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! A many-field constructor breaks on every new field. The builder lets
//! callers set only what they care about and rely on documented defaults.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a conversion session.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2gitbook::{AssemblyStyle, ConversionConfig};
///
/// let config = ConversionConfig::builder()
///     .title("Installation Guide")
///     .style(AssemblyStyle::Enriched)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Output directory. Default: the input file's parent directory.
    pub output_dir: Option<PathBuf>,

    /// Document title, used for the `# {title}` heading, the frontmatter and
    /// the output filename. Default: the input file's stem.
    pub title: Option<String>,

    /// Which document assembler to use. Default: [`AssemblyStyle::Minimal`].
    pub style: AssemblyStyle,

    /// Also emit a cross-file `SUMMARY.md` next to the single-document output.
    /// Page-split mode always writes its own SUMMARY.md and ignores this.
    /// Default: false.
    pub emit_summary: bool,

    /// Author recorded in the enriched frontmatter. Default: "pdf2gitbook".
    pub author: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            title: None,
            style: AssemblyStyle::default(),
            emit_summary: false,
            author: "pdf2gitbook".to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn style(mut self, style: AssemblyStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn emit_summary(mut self, v: bool) -> Self {
        self.config.emit_summary = v;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.config.author = author.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, ConvertError> {
        if let Some(ref t) = self.config.title {
            if t.trim().is_empty() {
                return Err(ConvertError::InvalidConfig(
                    "Title must not be blank".into(),
                ));
            }
        }
        if self.config.author.trim().is_empty() {
            return Err(ConvertError::InvalidConfig(
                "Author must not be blank".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Which document assembler renders the final Markdown.
///
/// One tagged enum consumed by a single `assemble` function, rather than two
/// structurally similar formatting code paths that drift apart over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssemblyStyle {
    /// Minimal GitBook frontmatter (title + description), plain TOC bullets. (default)
    #[default]
    Minimal,
    /// Adds author/date/tags frontmatter, a banner line, emoji section icons
    /// in the TOC, inline decoration of the body, and a generation footer.
    Enriched,
}
