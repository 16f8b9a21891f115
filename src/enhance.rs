//! Optional text-enhancement capability.
//!
//! Some users want a second pass where an external service (a grammar
//! checker, an LLM, a house-style rewriter) polishes the generated Markdown.
//! The core models that as a one-method capability trait and nothing more:
//! it never holds a credential, an HTTP client, or any knowledge of where
//! the replacement text comes from.
//!
//! The ordering contract matters: the baseline document is fully written
//! *before* any enhancer runs, and [`apply_enhancement`] overwrites it
//! atomically (temp file + rename). A failing enhancer therefore can never
//! corrupt the conversion's result — the caller gets
//! [`ConvertError::EnhancementFailed`] and the baseline stays on disk.

use crate::error::ConvertError;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Error produced by a [`TextEnhancer`] implementation.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct EnhanceError(pub String);

/// The text-enhancement collaborator contract.
pub trait TextEnhancer {
    /// Rewrite `markdown`, returning the replacement text.
    ///
    /// `title` is provided as context; implementations decide whether to use
    /// it. Any transport, credential or retry concerns live entirely inside
    /// the implementation.
    fn rewrite(&self, markdown: &str, title: &str) -> Result<String, EnhanceError>;
}

/// Run `enhancer` over the already-written document at `path` and overwrite
/// it with the result.
///
/// An empty or whitespace-only replacement counts as an invalid response.
/// On any failure the baseline file is left untouched.
pub fn apply_enhancement(
    enhancer: &dyn TextEnhancer,
    path: &Path,
    title: &str,
) -> Result<(), ConvertError> {
    let baseline = std::fs::read_to_string(path).map_err(|e| ConvertError::EnhancementFailed {
        title: title.to_string(),
        detail: format!("could not read baseline document: {e}"),
    })?;

    let rewritten =
        enhancer
            .rewrite(&baseline, title)
            .map_err(|e| ConvertError::EnhancementFailed {
                title: title.to_string(),
                detail: e.to_string(),
            })?;

    if rewritten.trim().is_empty() {
        return Err(ConvertError::EnhancementFailed {
            title: title.to_string(),
            detail: "enhancer returned an empty document".into(),
        });
    }

    // Temp file + rename so a failed write cannot truncate the baseline.
    let tmp_path = path.with_extension("md.tmp");
    std::fs::write(&tmp_path, &rewritten).map_err(|e| ConvertError::EnhancementFailed {
        title: title.to_string(),
        detail: format!("could not write enhanced document: {e}"),
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| ConvertError::EnhancementFailed {
        title: title.to_string(),
        detail: format!("could not replace baseline document: {e}"),
    })?;

    info!("Enhanced document written: {}", path.display());
    Ok(())
}
