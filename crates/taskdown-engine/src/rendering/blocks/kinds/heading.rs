/// ATX heading syntax: one to six `#` markers followed by whitespace.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest heading level recognized.
    pub const MAX_LEVEL: usize = 6;

    /// Parses a trimmed line into `(level, text)`.
    ///
    /// The markers and all whitespace following them are stripped. Seven or
    /// more markers, or markers without a following space, do not make a
    /// heading; the caller lets such lines degrade to paragraphs.
    pub fn parse(trimmed: &str) -> Option<(usize, &str)> {
        let rest = trimmed.trim_start_matches(Self::MARKER);
        let level = trimmed.len() - rest.len();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if !rest.starts_with(|c: char| c.is_whitespace()) {
            return None;
        }
        Some((level, rest.trim_start()))
    }
}
