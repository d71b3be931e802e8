use std::sync::OnceLock;

use regex::Regex;

use super::escape::escape_html;

/// Applies inline span markup to one leaf text segment.
///
/// Pipeline order is load-bearing: the text is escaped first, then bold,
/// italic, and inline-code spans are synthesized around the escaped text.
/// The tags introduced here are literal constants, so no user-typed `<`,
/// `>`, `&`, `"`, or `'` can reach the output unescaped, including inside
/// emphasis markers.
///
/// Never applied to code-block content, which is escaped only.
pub fn render_inline(text: &str) -> String {
    static BOLD_STARS: OnceLock<Regex> = OnceLock::new();
    static BOLD_UNDERSCORES: OnceLock<Regex> = OnceLock::new();
    static ITALIC_STAR: OnceLock<Regex> = OnceLock::new();
    static ITALIC_UNDERSCORE: OnceLock<Regex> = OnceLock::new();
    static CODE_SPAN: OnceLock<Regex> = OnceLock::new();

    let bold_stars =
        BOLD_STARS.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid bold regex"));
    let bold_underscores =
        BOLD_UNDERSCORES.get_or_init(|| Regex::new(r"__(.+?)__").expect("invalid bold regex"));
    let italic_star =
        ITALIC_STAR.get_or_init(|| Regex::new(r"\*([^*]+?)\*").expect("invalid italic regex"));
    // Word boundaries keep snake_case identifiers intact; adjacent
    // punctuation still counts as a boundary.
    let italic_underscore = ITALIC_UNDERSCORE
        .get_or_init(|| Regex::new(r"\b_([^_]+?)_\b").expect("invalid italic regex"));
    let code_span =
        CODE_SPAN.get_or_init(|| Regex::new(r"`([^`]+)`").expect("invalid code span regex"));

    let escaped = escape_html(text);
    let bolded = bold_stars.replace_all(&escaped, "<strong>$1</strong>");
    let bolded = bold_underscores.replace_all(&bolded, "<strong>$1</strong>");
    let italicized = italic_star.replace_all(&bolded, "<em>$1</em>");
    let italicized = italic_underscore.replace_all(&italicized, "<em>$1</em>");
    code_span
        .replace_all(&italicized, "<code>$1</code>")
        .into_owned()
}
