use super::kinds::{CodeFence, ListItem, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block rendering: each line is classified
/// independently, without reference to the surrounding mode. The builder
/// (phase 2) decides what the facts mean — inside a code block every fact
/// except the fence toggle is ignored, and a table row outranks a list
/// item that would match the same line.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The raw line as it appeared in the input.
    pub raw: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Whether the line toggles a code fence.
    pub fence_toggle: bool,
    /// Whether the trimmed line qualifies as a table row.
    pub table_row: bool,
    /// Whether the trimmed line is a table header/body separator.
    pub table_separator: bool,
    /// List-item facts, if the line parses as one.
    pub list_item: Option<ListItem<'a>>,
}

/// Classifies individual lines for the block rendering phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`] of local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let table_row = Table::is_row(line);
        LineClass {
            raw: line,
            is_blank: line.trim().is_empty(),
            fence_toggle: CodeFence::is_toggle(line),
            table_row,
            table_separator: table_row && Table::is_separator(line),
            list_item: ListItem::parse(line),
        }
    }
}
