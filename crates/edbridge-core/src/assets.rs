//! Code-asset routing: which files belong to the external editor.

/// Default extension list, comma-delimited as stored in preferences.
pub const DEFAULT_CODE_ASSETS: &str = ".cs,.shader,.h,.m,.c,.cpp,.txt,.md,.json";

/// The set of file extensions routed to the external editor.
///
/// Decoded from a comma-delimited preference string. Matching is a
/// case-sensitive suffix test against each entry, in order. An empty set
/// routes every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeAssetSet {
    extensions: Vec<String>,
}

impl CodeAssetSet {
    /// Decode the comma-delimited wire form. Empty entries (leading,
    /// trailing, or doubled commas) are dropped so they cannot silently turn
    /// the set into match-everything.
    pub fn parse(csv: &str) -> Self {
        Self {
            extensions: csv
                .split(',')
                .filter(|ext| !ext.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// True when `path` should be routed to the external editor: the set is
    /// empty, or the path ends with one of the configured extensions.
    pub fn is_code_asset(&self, path: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|ext| path.ends_with(ext))
    }
}
