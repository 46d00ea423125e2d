//! Narrow interfaces onto the module library collaborators.
//!
//! The transcoding pipeline never reaches into a bookshelf model or a
//! process-wide backend singleton; everything it needs from module metadata
//! and from the current key is behind these traits, passed explicitly into
//! each render call.

use crate::filters::Markup;

/// Per-word annotation data a content module can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Source-language lemma annotations.
    Lemmas,
    /// Morphology (grammatical form) tags.
    MorphTags,
    /// Strong's numbers.
    StrongNumbers,
}

/// Metadata of the content module a render call is working on.
pub trait ModuleInfo {
    /// The module's short name, as used in footnote addresses.
    fn name(&self) -> &str;

    /// Whether the module declares the given capability.
    fn has(&self, capability: Capability) -> bool;

    /// The markup dialect the module's text is tagged in.
    fn markup(&self) -> Markup {
        Markup::Gbf
    }
}

/// The addressable key (verse, lexicon entry, book node) being rendered.
pub trait KeyInfo {
    /// Short display form of the key, e.g. `Gen 1:1`, used in footnote
    /// addresses.
    fn short_text(&self) -> String;
}

impl KeyInfo for &str {
    fn short_text(&self) -> String {
        self.to_string()
    }
}

impl KeyInfo for String {
    fn short_text(&self) -> String {
        self.clone()
    }
}
