//! Indentation-triggered code fencing.
//!
//! GitBook renders deeply indented prose as code anyway; making the fence
//! explicit keeps the output stable across renderers and lets us strip the
//! indentation (which would otherwise nest the block inside list items).

/// Wrap maximal runs of indented lines (4+ spaces or a tab) in a fenced code
/// block, stripping each line's leading indentation.
///
/// The opening fence goes directly before the first indented line, the
/// closing fence directly after the last, followed by a blank line. A run
/// still open at end-of-text is closed.
pub fn fence_indented_blocks(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_block = false;

    for line in text.split('\n') {
        if line.starts_with("    ") || line.starts_with('\t') {
            if !in_block {
                out.push("```".to_string());
                in_block = true;
            }
            out.push(line.trim_start().to_string());
        } else {
            if in_block {
                out.push("```".to_string());
                out.push(String::new());
                in_block = false;
            }
            out.push(line.to_string());
        }
    }

    if in_block {
        out.push("```".to_string());
    }

    out.join("\n")
}
