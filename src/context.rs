use crate::module::{KeyInfo, ModuleInfo};

/// Per-render mutable state, threaded explicitly through the scan and merge
/// passes.
///
/// One context lives for exactly one render call (one key, one module) and
/// is discarded afterwards; the footnote counter never persists across
/// calls. Both collaborators are optional: a context without a module
/// renders with empty footnote addressing and annotates unconditionally.
pub struct FilterContext<'a> {
    /// Module metadata for the capability gate and footnote addressing.
    pub module: Option<&'a dyn ModuleInfo>,
    /// The key being rendered, for footnote addressing.
    pub key: Option<&'a dyn KeyInfo>,
    /// Whether the annotation merge pass may run at all. Off for search
    /// and other plain-text render paths.
    pub annotate: bool,
    pub(crate) footnote_ix: u32,
    pub(crate) suspend_text: bool,
    pub(crate) footnote_pre_open: bool,
}

impl<'a> FilterContext<'a> {
    pub fn new(module: Option<&'a dyn ModuleInfo>, key: Option<&'a dyn KeyInfo>) -> Self {
        FilterContext {
            module,
            key,
            annotate: true,
            footnote_ix: 0,
            suspend_text: false,
            footnote_pre_open: false,
        }
    }

    /// The current footnote sequence number; increments after each use.
    pub(crate) fn next_footnote(&mut self) -> u32 {
        let ix = self.footnote_ix;
        self.footnote_ix += 1;
        ix
    }

    pub(crate) fn module_name(&self) -> &str {
        self.module.map(|m| m.name()).unwrap_or("")
    }

    pub(crate) fn key_text(&self) -> String {
        self.key.map(|k| k.short_text()).unwrap_or_default()
    }
}

impl<'a> std::fmt::Debug for FilterContext<'a> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        formatter
            .debug_struct("FilterContext")
            .field("module", &self.module.map(|m| m.name()))
            .field("annotate", &self.annotate)
            .field("footnote_ix", &self.footnote_ix)
            .field("suspend_text", &self.suspend_text)
            .field("footnote_pre_open", &self.footnote_pre_open)
            .finish()
    }
}
