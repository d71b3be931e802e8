/// Blockquote syntax: a leading `>` on the trimmed line.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote marker and at most one following space, returning
    /// the quoted text, or `None` if the line is not a blockquote.
    pub fn strip_marker(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
