//! Per-dialect markup filters.
//!
//! Each supported module dialect implements [`Filter`]; the renderer picks
//! an implementation per module at render time. There is no inheritance
//! chain: the scanner owns the token-boundary mechanics and calls back into
//! the filter for the table and for semantic tokens.

mod gbf;
mod plain;

pub use gbf::GbfHtml;
pub use plain::PlainHtml;

use std::sync::OnceLock;

use crate::context::FilterContext;
use crate::scanner;
use crate::table::TokenTable;

/// The markup dialect a module's text is tagged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Markup {
    /// The GBF legacy tagged-text dialect.
    #[default]
    Gbf,
    /// Untagged text; rendered with display-markup characters escaped.
    Plain,
}

/// A markup-dialect filter: one scan pass over a raw buffer, producing
/// display markup.
///
/// Implementations are stateless once constructed (all per-render state
/// lives in the [`FilterContext`]) and are shared across threads.
pub trait Filter: Sync {
    /// The dialect's token substitution table.
    fn table(&self) -> &TokenTable;

    /// Whether tokens neither in the table nor claimed by
    /// [`handle_token`](Filter::handle_token) are re-emitted literally.
    /// On for every current dialect: unsupported markup degrades to
    /// visible, byte-identical text rather than vanishing.
    fn pass_unknown_tokens(&self) -> bool {
        true
    }

    /// Computes output for a semantic token. Returns `false` to decline,
    /// handing the token back to the scanner's unknown-token policy.
    fn handle_token(&self, _out: &mut String, _token: &str, _ctx: &mut FilterContext) -> bool {
        false
    }

    /// Transforms one raw buffer into display markup.
    fn process_text(&self, text: &str, ctx: &mut FilterContext) -> String {
        scanner::scan(self, text, ctx)
    }
}

/// Shared filter instance for a dialect. Tables are built on first use and
/// never mutated afterwards, so concurrent renders may read them freely.
pub(crate) fn filter_for(markup: Markup) -> &'static dyn Filter {
    static GBF: OnceLock<GbfHtml> = OnceLock::new();
    static PLAIN: OnceLock<PlainHtml> = OnceLock::new();

    match markup {
        Markup::Gbf => GBF.get_or_init(GbfHtml::new),
        Markup::Plain => PLAIN.get_or_init(PlainHtml::new),
    }
}
