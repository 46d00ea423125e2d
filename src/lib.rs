//! A transcoding pipeline for tagged reference-text module markup.
//!
//! Study-application modules (Bibles, commentaries, lexicons) ship their
//! text in legacy tagged dialects; this crate converts such a buffer into
//! structured display HTML. The exemplar dialect is GBF: a scan pass
//! substitutes simple tokens and computes footnotes, font spans and literal
//! escapes, then a merge pass attaches trailing Strong's-number and
//! morphology markers to the words they annotate:
//!
//! ```
//! use lectern::{gbf_to_html, Options};
//!
//! let html = gbf_to_html("Am Anfang<WH07225> schuf<WH01254><WTH8804>", &Options::default());
//! assert_eq!(
//!     html,
//!     "<span lemma=\"H07225\">Am Anfang</span> \
//!      <span lemma=\"H01254\" morph=\"H8804\">schuf</span>"
//! );
//! ```
//!
//! Malformed content never aborts a render: unknown or unterminated tokens
//! pass through byte-identically, and annotation runs with no word to
//! attach to are dropped. The worst case is imperfect rendering, never
//! loss of the surrounding text.
//!
//! Module metadata and key addressing are injected per render call through
//! the [`ModuleInfo`] and [`KeyInfo`] traits; see [`Renderer`].

mod annotate;
mod context;
pub mod filters;
mod module;
mod options;
mod render;
mod scanner;
mod strings;
mod table;


pub use crate::context::FilterContext;
pub use crate::filters::{Filter, GbfHtml, Markup, PlainHtml};
pub use crate::module::{Capability, KeyInfo, ModuleInfo};
pub use crate::options::Options;
pub use crate::render::Renderer;
pub use crate::table::TokenTable;

/// Renders one GBF buffer to display HTML with no module or key attached:
/// footnote addresses are empty and annotations merge unconditionally.
///
/// For keyed, module-aware rendering use [`Renderer::render_entry`].
pub fn gbf_to_html(text: &str, options: &Options) -> String {
    Renderer::new(options).render_entry(text, None, None)
}
