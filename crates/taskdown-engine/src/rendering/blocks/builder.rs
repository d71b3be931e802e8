use crate::rendering::escape::escape_html;
use crate::rendering::inline::render_inline;

use super::classify::LineClass;
use super::kinds::{BlockQuote, Heading, Table};

/// Fragment endings after which a blank line emits no `<br>`.
const BLOCK_CLOSERS: [&str; 10] = [
    "</h1>",
    "</h2>",
    "</h3>",
    "</h4>",
    "</h5>",
    "</h6>",
    "</ul>",
    "</pre>",
    "</blockquote>",
    "</table>",
];

/// The active multi-line construct, if any.
///
/// At most one buffer is open at a time; switching constructs flushes the
/// previous buffer before the new one opens.
#[derive(Debug)]
enum BlockMode {
    None,
    Code {
        buffer: String,
    },
    List {
        items: Vec<String>,
    },
    Table {
        rows: Vec<String>,
        header_pending: bool,
    },
}

/// Phase 2 of block rendering: consumes classified lines, tracks the open
/// [`BlockMode`], and emits closed HTML block fragments.
pub struct FragmentBuilder {
    mode: BlockMode,
    out: Vec<String>,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self {
            mode: BlockMode::None,
            out: vec![],
        }
    }

    /// Feeds one classified line through the dispatch, first match wins:
    /// fence toggle, verbatim code content, table row, list item, then the
    /// single-line defaults (blank, heading, blockquote, paragraph).
    pub fn push(&mut self, c: &LineClass<'_>) {
        if c.fence_toggle {
            if matches!(self.mode, BlockMode::Code { .. }) {
                self.flush_code();
            } else {
                self.flush_open();
                self.mode = BlockMode::Code {
                    buffer: String::new(),
                };
            }
            return;
        }

        if let BlockMode::Code { buffer } = &mut self.mode {
            // Everything between fences is verbatim, blanks and all.
            buffer.push_str(c.raw);
            buffer.push('\n');
            return;
        }

        if c.table_row {
            self.consume_table_row(c);
            return;
        }
        self.flush_table();

        if let Some(item) = &c.list_item {
            if !matches!(self.mode, BlockMode::List { .. }) {
                self.flush_open();
                self.mode = BlockMode::List { items: vec![] };
            }
            let rendered = match item.checkbox {
                Some(checked) => {
                    let checked_attr = if checked { " checked" } else { "" };
                    format!(
                        "<li class=\"task-checkbox-item\">\
                         <input type=\"checkbox\"{checked_attr} disabled> {}</li>",
                        render_inline(item.text)
                    )
                }
                None => format!("<li>{}</li>", render_inline(item.text)),
            };
            if let BlockMode::List { items } = &mut self.mode {
                items.push(rendered);
            }
            return;
        }
        self.flush_list();

        let trimmed = c.raw.trim();
        if trimmed.is_empty() {
            if self.wants_break() {
                self.out.push("<br>".to_string());
            }
        } else if let Some((level, text)) = Heading::parse(trimmed) {
            self.out
                .push(format!("<h{level}>{}</h{level}>", render_inline(text)));
        } else if let Some(text) = BlockQuote::strip_marker(trimmed) {
            self.out
                .push(format!("<blockquote>{}</blockquote>", render_inline(text)));
        } else {
            self.out.push(format!("<p>{}</p>", render_inline(trimmed)));
        }
    }

    /// EOF flush: whichever construct is still open closes through the same
    /// path as a mid-scan close, unterminated fences included.
    pub fn finish(mut self) -> Vec<String> {
        self.flush_open();
        self.out
    }

    fn consume_table_row(&mut self, c: &LineClass<'_>) {
        if !matches!(self.mode, BlockMode::Table { .. }) {
            self.flush_open();
            self.mode = BlockMode::Table {
                rows: vec![],
                header_pending: true,
            };
        }
        if let BlockMode::Table {
            rows,
            header_pending,
        } = &mut self.mode
        {
            if c.table_separator {
                *header_pending = false;
                return;
            }
            let tag = if *header_pending { "th" } else { "td" };
            let cells: String = Table::cells(c.raw)
                .into_iter()
                .map(|cell| format!("<{tag}>{}</{tag}>", render_inline(cell)))
                .collect();
            rows.push(format!("<tr>{cells}</tr>"));
        }
    }

    /// Force-closes whichever construct is open, flushing it into the
    /// output. No-op when the mode is already `None`.
    fn flush_open(&mut self) {
        self.flush_code();
        self.flush_list();
        self.flush_table();
    }

    fn flush_code(&mut self) {
        let prev = std::mem::replace(&mut self.mode, BlockMode::None);
        if let BlockMode::Code { buffer } = prev {
            self.out.push(format!(
                "<pre><code>{}</code></pre>",
                escape_html(buffer.trim())
            ));
        } else {
            self.mode = prev;
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.mode, BlockMode::None);
        if let BlockMode::List { items } = prev {
            self.out.push(format!("<ul>{}</ul>", items.concat()));
        } else {
            self.mode = prev;
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.mode, BlockMode::None);
        if let BlockMode::Table { rows, .. } = prev {
            self.out.push(format!("<table>{}</table>", rows.concat()));
        } else {
            self.mode = prev;
        }
    }

    /// A blank line spaces out running text, but not right after a closed
    /// block element or before anything has been emitted.
    fn wants_break(&self) -> bool {
        match self.out.last() {
            Some(last) => !BLOCK_CLOSERS.iter().any(|closer| last.ends_with(closer)),
            None => false,
        }
    }
}

impl Default for FragmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::blocks::classify::LineClassifier;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> String {
        let mut builder = FragmentBuilder::new();
        for line in lines {
            builder.push(&LineClassifier.classify(line));
        }
        builder.finish().concat()
    }

    #[test]
    fn paragraph_line() {
        assert_eq!(build(&["hello"]), "<p>hello</p>");
    }

    #[test]
    fn code_block_closes_on_fence() {
        assert_eq!(
            build(&["```", "let x = 1;", "```"]),
            "<pre><code>let x = 1;</code></pre>"
        );
    }

    #[test]
    fn code_block_content_is_verbatim() {
        assert_eq!(
            build(&["```", "- no list", "# no heading", "| no | table |", "```"]),
            "<pre><code>- no list\n# no heading\n| no | table |</code></pre>"
        );
    }

    #[test]
    fn unterminated_code_block_flushes_at_eof() {
        assert_eq!(
            build(&["```", "line one", "line two"]),
            "<pre><code>line one\nline two</code></pre>"
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(build(&["```", "```"]), "<pre><code></code></pre>");
    }

    #[test]
    fn list_accumulates_and_closes() {
        assert_eq!(
            build(&["- one", "- two", "after"]),
            "<ul><li>one</li><li>two</li></ul><p>after</p>"
        );
    }

    #[test]
    fn list_flushes_at_eof() {
        assert_eq!(build(&["- one"]), "<ul><li>one</li></ul>");
    }

    #[test]
    fn checkbox_items() {
        assert_eq!(
            build(&["- [x] done", "- [ ] todo"]),
            "<ul>\
             <li class=\"task-checkbox-item\"><input type=\"checkbox\" checked disabled> done</li>\
             <li class=\"task-checkbox-item\"><input type=\"checkbox\" disabled> todo</li>\
             </ul>"
        );
    }

    #[test]
    fn table_header_then_body() {
        assert_eq!(
            build(&["| a | b |", "| - | - |", "| 1 | 2 |"]),
            "<table><tr><th>a</th><th>b</th></tr><tr><td>1</td><td>2</td></tr></table>"
        );
    }

    #[test]
    fn table_without_separator_keeps_header_cells() {
        assert_eq!(
            build(&["| a |", "| b |"]),
            "<table><tr><th>a</th></tr><tr><th>b</th></tr></table>"
        );
    }

    #[test]
    fn table_closes_on_blank_line_without_break() {
        assert_eq!(
            build(&["| a |", "", "after"]),
            "<table><tr><th>a</th></tr></table><p>after</p>"
        );
    }

    #[test]
    fn table_row_interrupting_list_force_closes_it() {
        assert_eq!(
            build(&["- item", "| a |"]),
            "<ul><li>item</li></ul><table><tr><th>a</th></tr></table>"
        );
    }

    #[test]
    fn list_item_interrupting_table_force_closes_it() {
        assert_eq!(
            build(&["| a |", "- item"]),
            "<table><tr><th>a</th></tr></table><ul><li>item</li></ul>"
        );
    }

    #[test]
    fn fence_interrupting_list_force_closes_it() {
        assert_eq!(
            build(&["- item", "```", "code", "```"]),
            "<ul><li>item</li></ul><pre><code>code</code></pre>"
        );
    }

    #[test]
    fn blank_between_paragraphs_emits_break() {
        assert_eq!(
            build(&["one", "", "two"]),
            "<p>one</p><br><p>two</p>"
        );
    }

    #[test]
    fn blank_after_heading_emits_no_break() {
        assert_eq!(
            build(&["# Title", "", "text"]),
            "<h1>Title</h1><p>text</p>"
        );
    }

    #[test]
    fn leading_blank_lines_emit_nothing() {
        assert_eq!(build(&["", "", "text"]), "<p>text</p>");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(build(&["### Third"]), "<h3>Third</h3>");
    }

    #[test]
    fn seven_hashes_degrade_to_paragraph() {
        assert_eq!(build(&["####### x"]), "<p>####### x</p>");
    }

    #[test]
    fn blockquote_line() {
        assert_eq!(build(&["> wisdom"]), "<blockquote>wisdom</blockquote>");
    }

    #[test]
    fn inline_spans_reach_table_cells() {
        assert_eq!(
            build(&["| **a** |"]),
            "<table><tr><th><strong>a</strong></th></tr></table>"
        );
    }

    #[test]
    fn inline_spans_reach_list_items() {
        assert_eq!(
            build(&["- `code` item"]),
            "<ul><li><code>code</code> item</li></ul>"
        );
    }
}
