//! The token stream scanner: first pass over a raw module buffer.
//!
//! Tokens are delimited by `<` and `>`. Text between tokens is copied
//! through verbatim unless the context has suspended pass-through (inside a
//! footnote body). Each token is tried against the filter's substitution
//! table first, then its semantic handler; what neither claims is either
//! re-emitted byte-identically or dropped, per the filter's policy.
//!
//! Malformed input never stops the scan: a `<` with no closing `>` before
//! the end of the buffer is treated as literal text, since module content
//! is often excerpted mid-paragraph.

use crate::context::FilterContext;
use crate::filters::Filter;

pub(crate) fn scan<F>(filter: &F, src: &str, ctx: &mut FilterContext) -> String
where
    F: Filter + ?Sized,
{
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut out = String::with_capacity(len + len / 4);
    let matcher = jetscii::bytes!(b'<');

    let mut ix = 0;
    while ix < len {
        let tok_start = match matcher.find(&bytes[ix..]) {
            Some(offset) => ix + offset,
            None => len,
        };

        if tok_start > ix && !ctx.suspend_text {
            out.push_str(&src[ix..tok_start]);
        }
        if tok_start >= len {
            break;
        }

        let mut tok_end = tok_start + 1;
        while tok_end < len && bytes[tok_end] != b'>' {
            tok_end += 1;
        }
        if tok_end >= len {
            // Unterminated token; emit the rest as literal text.
            if !ctx.suspend_text {
                out.push_str(&src[tok_start..]);
            }
            break;
        }

        // Tokens are dispatched even while pass-through is suspended;
        // the footnote-end token is what clears the suspension.
        let token = &src[tok_start + 1..tok_end];
        if let Some(replacement) = filter.table().lookup(token) {
            out.push_str(replacement);
        } else if !filter.handle_token(&mut out, token, ctx) && filter.pass_unknown_tokens() {
            out.push('<');
            out.push_str(token);
            out.push('>');
        }

        ix = tok_end + 1;
    }

    out
}
