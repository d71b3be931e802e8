use std::sync::OnceLock;

use regex::Regex;

/// Pipe-delimited table syntax.
///
/// A row line starts and ends with a pipe after trimming. A separator row
/// (pipes, dashes, colons, whitespace only) sits between header and body;
/// it produces no cells, it only ends the header.
pub struct Table;

impl Table {
    /// The cell delimiter.
    pub const PIPE: char = '|';

    /// True if the trimmed line qualifies as a table row.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// True if the trimmed line is a header/body separator row.
    pub fn is_separator(line: &str) -> bool {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        let separator = SEPARATOR
            .get_or_init(|| Regex::new(r"^\|[\s\-:|]+\|$").expect("invalid separator regex"));
        separator.is_match(line.trim())
    }

    /// Splits a row line into trimmed cell texts: outer pipes stripped,
    /// remainder split on the internal pipes. Uneven rows split exactly as
    /// written, with no padding or rejection.
    pub fn cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        // is_row guarantees ASCII pipes at both ends; a lone `|` has no
        // interior at all.
        let inner = if t.len() >= 2 { &t[1..t.len() - 1] } else { "" };
        inner.split(Self::PIPE).map(str::trim).collect()
    }
}
