//! Configuration for a render call.

#[cfg(feature = "bon")]
use bon::Builder;

use crate::filters::Markup;

/// Umbrella options struct for the render pipeline.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct Options {
    /// Whether to run the annotation merge pass, wrapping words in
    /// `<span lemma="..." morph="...">` from their trailing linkage
    /// markers. Disable on search and other plain-text render paths where
    /// entry attributes are irrelevant; the capability gate still applies
    /// when this is on.
    ///
    /// ```rust
    /// # use lectern::{gbf_to_html, Options};
    /// let mut options = Options::default();
    /// options.annotate = false;
    /// assert_eq!(gbf_to_html("word<WH1234>", &options), "word<WH1234>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub annotate: bool,

    /// The markup dialect assumed when no module is attached to the render
    /// call (modules that declare a dialect win).
    ///
    /// ```rust
    /// # use lectern::{Markup, Options, Renderer};
    /// let mut options = Options::default();
    /// options.markup = Markup::Plain;
    /// let out = Renderer::new(&options).render_entry("2 < 3", None, None);
    /// assert_eq!(out, "2 &lt; 3");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub markup: Markup,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            annotate: true,
            markup: Markup::Gbf,
        }
    }
}
