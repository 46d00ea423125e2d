//! Untagged module text → display HTML.

use crate::context::FilterContext;
use crate::table::TokenTable;

use super::Filter;

/// Filter for modules whose entries carry no markup at all: reserved
/// display-markup characters are escaped and line breaks become `<br/>`,
/// nothing else changes.
pub struct PlainHtml {
    table: TokenTable,
}

impl PlainHtml {
    pub fn new() -> Self {
        PlainHtml {
            table: TokenTable::new(),
        }
    }
}

impl Default for PlainHtml {
    fn default() -> Self {
        PlainHtml::new()
    }
}

impl Filter for PlainHtml {
    fn table(&self) -> &TokenTable {
        &self.table
    }

    // Plain text has no token grammar; the scanner is bypassed entirely.
    fn process_text(&self, text: &str, _ctx: &mut FilterContext) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '\n' => out.push_str("<br/>"),
                _ => out.push(ch),
            }
        }
        out
    }
}
