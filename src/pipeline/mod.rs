//! Pipeline stages for text-to-structure inference.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us reorder or swap a
//! heuristic without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! pages ──▶ clean ──▶ headings ──▶ codeblocks ──▶ tables ──▶ decorate
//! (extract) (whitespace) (## / TOC)  (fences)     (| rows |)  (enriched only)
//! ```
//!
//! 1. [`clean`]      — collapse whitespace, drop bare page-number lines
//! 2. [`headings`]   — tag heading lines, feeding the [`crate::toc::Toc`]
//! 3. [`codeblocks`] — fence indentation-triggered code regions
//! 4. [`tables`]     — reflow whitespace-delimited columns into GFM rows
//! 5. [`decorate`]   — inline decoration, applied only by the enriched style
//!
//! The order is fixed: each pass classifies lines by shape, and a later
//! pass's insertions (fences, pipe rows) would confuse an earlier one.
//! [`anchor`] is the stateless slug function the TOC builder uses.

pub mod anchor;
pub mod clean;
pub mod codeblocks;
pub mod decorate;
pub mod headings;
pub mod tables;
