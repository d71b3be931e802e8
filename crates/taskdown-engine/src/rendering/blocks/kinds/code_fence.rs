/// Fenced code block syntax.
///
/// All fence-related syntax knowledge lives here, not in classifier or
/// builder code. A fence line toggles the code-block mode; content between
/// fences is buffered verbatim and escaped, never span-processed.
pub struct CodeFence;

impl CodeFence {
    /// The fence marker.
    pub const FENCE: &'static str = "```";

    /// True if the line toggles a code fence: its trimmed content starts
    /// with the marker. Any trailing text (info string) is ignored.
    pub fn is_toggle(line: &str) -> bool {
        line.trim().starts_with(Self::FENCE)
    }
}
