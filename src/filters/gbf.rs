//! The GBF → display-HTML filter.

use phf::phf_map;

use crate::annotate;
use crate::context::FilterContext;
use crate::module::Capability;
use crate::scanner;
use crate::table::TokenTable;

use super::Filter;

/// Substitutions any GBF consumer starts from: character escapes, line and
/// paragraph breaks, and the plain rendering of footnote/font closers.
static BASE_TOKENS: phf::Map<&'static str, &'static str> = phf_map! {
    "Rf" => ")</font>",
    "Fn" => "</font>",
    "CL" => "<br/>",
    "CM" => "<br/>",
    "CG" => "&gt;",
    "CT" => "&lt;",
};

/// Renders GBF-tagged module text as structured display HTML.
///
/// Simple spans go through the token table; footnotes, font faces, literal
/// hex escapes and word-linkage markers are computed by the token handler;
/// linkage markers are then merged onto their words by the annotation pass,
/// gated on the module's declared capabilities.
pub struct GbfHtml {
    table: TokenTable,
}

impl GbfHtml {
    pub fn new() -> Self {
        let mut table = TokenTable::seed(&BASE_TOKENS);

        // The footnote end must reach the token handler so it can resume
        // text pass-through.
        table.remove("Rf");

        table.register("FI", "<span class=\"italic\">");
        table.register("Fi", "</span>");

        table.register("FB", "<span class=\"bold\">");
        table.register("Fb", "</span>");

        table.register("FR", "<span class=\"jesuswords\">");
        table.register("Fr", "</span>");

        table.register("FU", "<u>");
        table.register("Fu", "</u>");

        // Old Testament quote
        table.register("FO", "<span class=\"quotation\">");
        table.register("Fo", "</span>");

        table.register("FS", "<span class=\"sup\">");
        table.register("Fs", "</span>");

        table.register("FV", "<span class=\"sub\">");
        table.register("Fv", "</span>");

        table.register("TT", "<div class=\"booktitle\">");
        table.register("Tt", "</div>");

        table.register("TS", "<div class=\"sectiontitle\">");
        table.register("Ts", "</div>");

        table.register("JR", "<span class=\"right\">");
        table.register("JC", "<span class=\"center\">");
        table.register("JL", "</span>");

        GbfHtml { table }
    }
}

impl Default for GbfHtml {
    fn default() -> Self {
        GbfHtml::new()
    }
}

impl Filter for GbfHtml {
    fn table(&self) -> &TokenTable {
        &self.table
    }

    fn handle_token(&self, out: &mut String, token: &str, ctx: &mut FilterContext) -> bool {
        let bytes = token.as_bytes();

        if bytes.starts_with(b"WG") || bytes.starts_with(b"WH") || bytes.starts_with(b"WT") {
            // Word-linkage marker; re-emitted literally, unresolved. The
            // annotation merge pass attaches it to the preceding word.
            out.push('<');
            out.push_str(token);
            out.push('>');
        } else if bytes.starts_with(b"RB") {
            // Start of a footnote with embedded text.
            ctx.footnote_pre_open = true;
            out.push_str("<span class=\"footnotepre\">");
        } else if bytes.starts_with(b"RF") {
            if ctx.footnote_pre_open {
                out.push_str("</span>");
                ctx.footnote_pre_open = false;
            }

            let sequence = ctx.next_footnote();
            out.push_str(" <span class=\"footnote\" note=\"");
            out.push_str(ctx.module_name());
            out.push('/');
            out.push_str(&ctx.key_text());
            out.push('/');
            out.push_str(&sequence.to_string());
            out.push_str("\">*</span> ");

            // The footnote body is not rendered inline.
            ctx.suspend_text = true;
        } else if bytes.starts_with(b"Rf") {
            ctx.suspend_text = false;
        } else if bytes.starts_with(b"FN") {
            // The matching </font> comes from the table entry for Fn.
            // Quotes are stripped from the face so the payload cannot break
            // out of the attribute string.
            out.push_str("<font face=\"");
            for ch in token[2..].chars() {
                if ch != '"' {
                    out.push(ch);
                }
            }
            out.push_str("\">");
        } else if bytes.starts_with(b"CA") {
            // ASCII value in hex, e.g. <CA3E> for '>'. The format
            // guarantees a well-formed payload at this point.
            assert!(token.len() == 4, "malformed CA escape: <{}>", token);
            out.push(hex_to_char(&bytes[2..4]));
        } else {
            return false;
        }

        true
    }

    fn process_text(&self, text: &str, ctx: &mut FilterContext) -> String {
        let scanned = scanner::scan(self, text, ctx);

        if !ctx.annotate {
            return scanned;
        }

        // Only merge if the module can carry linkage annotations at all; a
        // module-less context annotates unconditionally.
        if let Some(module) = ctx.module {
            if !module.has(Capability::Lemmas)
                && !module.has(Capability::MorphTags)
                && !module.has(Capability::StrongNumbers)
            {
                return scanned;
            }
        }

        match annotate::merge_linkage(&scanned) {
            Some(merged) => merged,
            None => scanned,
        }
    }
}

fn hex_digit_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => panic!("invalid hex digit in CA escape"),
    }
}

fn hex_to_char(hex: &[u8]) -> char {
    char::from(hex_digit_value(hex[0]) * 16 + hex_digit_value(hex[1]))
}
