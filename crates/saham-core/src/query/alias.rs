//! Alias tables mapping user-facing shorthands onto canonical headers.
//!
//! Users type `ROE > 10`; the screener column is literally `"ROE %"`. Each
//! dataset ships a fixed alias table so friendly shorthands resolve to the
//! real header before evaluation.

use indexmap::IndexMap;

/// A fixed shorthand-to-canonical column name mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
}

impl AliasTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias, builder style.
    #[must_use]
    pub fn with(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.entries.insert(alias.into(), canonical.into());
        self
    }

    /// Resolves a name: returns the canonical header for a known alias,
    /// otherwise the name itself.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map_or(name, String::as_str)
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
