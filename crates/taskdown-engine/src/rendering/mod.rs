//! # Fragment Rendering
//!
//! Line-oriented rendering of task/note text into an HTML fragment.
//!
//! ## Architecture
//!
//! Three components composed linearly:
//!
//! - **`blocks`**: a per-line classifier plus an explicit block state
//!   machine (`FragmentBuilder`) that buffers multi-line constructs (code
//!   blocks, lists, tables) and emits closed HTML block elements.
//! - **`inline`**: a pure text-to-text transform applied to every leaf
//!   segment (paragraph, heading, blockquote, list item, table cell) that
//!   escapes first and then synthesizes bold/italic/inline-code markup.
//! - **`escape`**: the HTML escaper, called by `inline` and used directly
//!   for code-block content (which never receives span synthesis).
//!
//! ## Ordering invariant
//!
//! User text is escaped strictly before any markup synthesis and before
//! block-level tag wrapping. The only unescaped angle brackets in the
//! output come from the fixed set of tags synthesized here.

pub mod blocks;
pub mod escape;
pub mod inline;

use blocks::{FragmentBuilder, LineClassifier};

/// Placeholder fragment returned for empty or absent input.
pub const NO_DESCRIPTION: &str = "No description";

/// Renders markdown-ish text into an HTML fragment.
///
/// Empty input yields [`NO_DESCRIPTION`]. Otherwise the input is split on
/// `\n` and scanned line by line; any block construct still open at end of
/// input is flushed, so the result is always a well-formed fragment. Total
/// over all inputs: malformed constructs degrade to paragraphs rather than
/// erroring.
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    let classifier = LineClassifier;
    let mut builder = FragmentBuilder::new();

    for line in text.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish().concat()
}

/// Convenience wrapper for call sites holding optional text; `None` renders
/// the same placeholder as the empty string.
pub fn render_opt(text: Option<&str>) -> String {
    render(text.unwrap_or_default())
}
