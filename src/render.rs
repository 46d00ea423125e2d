use crate::context::FilterContext;
use crate::filters::filter_for;
use crate::module::{KeyInfo, ModuleInfo};
use crate::options::Options;

/// Assembles display markup per addressable content unit.
///
/// Every entry is one independent render call: a fresh [`FilterContext`]
/// (footnote numbering restarts at 0), the filter selected from the
/// module's declared dialect, one pass through the pipeline. Render calls
/// for different keys or modules are independent and may run on different
/// threads.
#[derive(Debug)]
pub struct Renderer<'o> {
    options: &'o Options,
}

impl<'o> Renderer<'o> {
    pub fn new(options: &'o Options) -> Self {
        Renderer { options }
    }

    /// Renders the raw module text of one key.
    ///
    /// ```
    /// # use lectern::{Options, Renderer};
    /// let options = Options::default();
    /// let renderer = Renderer::new(&options);
    /// let html = renderer.render_entry("<FI>Selah<Fi>", None, None);
    /// assert_eq!(html, "<span class=\"italic\">Selah</span>");
    /// ```
    pub fn render_entry(
        &self,
        raw: &str,
        module: Option<&dyn ModuleInfo>,
        key: Option<&dyn KeyInfo>,
    ) -> String {
        let markup = module
            .map(|m| m.markup())
            .unwrap_or(self.options.markup);
        let filter = filter_for(markup);

        let mut ctx = FilterContext::new(module, key);
        ctx.annotate = self.options.annotate;
        filter.process_text(raw, &mut ctx)
    }

    /// Renders a sequence of keyed entries and concatenates the results in
    /// order. Each entry is its own render call.
    pub fn render_all<'k, I>(&self, entries: I, module: Option<&dyn ModuleInfo>) -> String
    where
        I: IntoIterator<Item = (&'k dyn KeyInfo, &'k str)>,
    {
        let mut out = String::new();
        for (key, raw) in entries {
            out.push_str(&self.render_entry(raw, module, Some(key)));
        }
        out
    }
}
