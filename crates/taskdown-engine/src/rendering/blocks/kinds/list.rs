use std::sync::OnceLock;

use regex::Regex;

/// A parsed list-item line.
///
/// Covers plain bullets (`-`, `*`, `+` followed by a space) and the
/// checkbox form `- [ ] text` / `- [x] text`. The checkbox mark is
/// case-insensitive; checkbox lines are tested first so `[x] text` is not
/// swallowed as plain item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Item text after the marker, fed to inline-span processing.
    pub text: &'a str,
    /// `Some(checked)` for checkbox items, `None` for plain bullets.
    pub checkbox: Option<bool>,
}

impl<'a> ListItem<'a> {
    /// Parses a line into a list item, or `None` if it is not one.
    pub fn parse(line: &'a str) -> Option<ListItem<'a>> {
        static CHECKBOX: OnceLock<Regex> = OnceLock::new();
        static BULLET: OnceLock<Regex> = OnceLock::new();

        let checkbox_re = CHECKBOX.get_or_init(|| {
            Regex::new(r"^\s*-\s+\[([xX\s])\]\s+(.+)$").expect("invalid checkbox regex")
        });
        let bullet_re = BULLET
            .get_or_init(|| Regex::new(r"^\s*[-*+]\s+(.+)$").expect("invalid bullet regex"));

        if let Some(caps) = checkbox_re.captures(line)
            && let (Some(mark), Some(text)) = (caps.get(1), caps.get(2))
        {
            return Some(ListItem {
                text: text.as_str(),
                checkbox: Some(mark.as_str().eq_ignore_ascii_case("x")),
            });
        }

        if let Some(caps) = bullet_re.captures(line)
            && let Some(text) = caps.get(1)
        {
            return Some(ListItem {
                text: text.as_str(),
                checkbox: None,
            });
        }

        None
    }
}
