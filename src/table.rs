use caseless::default_case_fold_str;
use rustc_hash::FxHashMap;

/// The token substitution table: a mapping from short markup tokens to
/// literal output fragments.
///
/// A table is seeded from a dialect's static base map, adjusted with
/// [`register`](TokenTable::register) and [`remove`](TokenTable::remove)
/// while the owning filter is constructed, and read-only afterwards. Lookup
/// is pure; unknown tokens are not an error here — the scanner decides what
/// to do with them.
///
/// ```
/// use lectern::TokenTable;
///
/// let mut table = TokenTable::new();
/// table.register("FI", "<span class=\"italic\">");
/// assert_eq!(table.lookup("FI"), Some("<span class=\"italic\">"));
/// assert_eq!(table.lookup("fi"), None);
/// table.remove("FI");
/// assert_eq!(table.lookup("FI"), None);
/// ```
#[derive(Debug, Default)]
pub struct TokenTable {
    map: FxHashMap<String, String>,
    fold_case: bool,
}

impl TokenTable {
    /// An empty, case-sensitive table.
    pub fn new() -> Self {
        TokenTable::default()
    }

    /// An empty table that matches tokens under default Unicode case
    /// folding. GBF is case-sensitive (`FI` opens italics, `Fi` closes
    /// them); some other dialects are not.
    pub fn case_insensitive() -> Self {
        TokenTable {
            map: FxHashMap::default(),
            fold_case: true,
        }
    }

    /// A case-sensitive table pre-populated from a dialect's base map.
    pub(crate) fn seed(base: &phf::Map<&'static str, &'static str>) -> Self {
        let mut table = TokenTable::new();
        for (token, replacement) in base.entries() {
            table.register(token, replacement);
        }
        table
    }

    fn key(&self, token: &str) -> String {
        if self.fold_case {
            default_case_fold_str(token)
        } else {
            token.to_string()
        }
    }

    /// Maps `token` to `replacement`, displacing any previous mapping.
    pub fn register(&mut self, token: &str, replacement: &str) {
        self.map.insert(self.key(token), replacement.to_string());
    }

    /// Drops the mapping for `token`, so the token reaches the custom
    /// handler instead.
    pub fn remove(&mut self, token: &str) {
        let key = self.key(token);
        self.map.remove(&key);
    }

    /// The replacement fragment for `token`, if one is registered.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        if self.fold_case {
            self.map.get(&default_case_fold_str(token))
        } else {
            self.map.get(token)
        }
        .map(|s| s.as_str())
    }
}
