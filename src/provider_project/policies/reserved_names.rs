use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ReservedNameTable policy for provider names that collide with reserved
/// identifiers in a target ecosystem
///
/// Maps a canonical provider short name to the Java package segment used in
/// its place. `null` and `random` are reserved words in the JVM languages the
/// generated bindings target, so `com.hashicorp.cdktf.providers.null` would
/// not compile.
///
/// The table is looked up, never inferred. New collisions are added with
/// [`ReservedNameTable::insert`] or through the `naming.reserved_names`
/// section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservedNameTable(BTreeMap<String, String>);

/// Suffix appended to a reserved provider name by the default table
pub const RESERVED_NAME_SUFFIX: &str = "_provider";

const DEFAULT_RESERVED_NAMES: &[&str] = &["null", "random"];

impl ReservedNameTable {
    /// Creates an empty table with no reserved names
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Registers `name` as reserved, mapping it to `replacement`
    pub fn insert(&mut self, name: impl Into<String>, replacement: impl Into<String>) {
        self.0.insert(name.into(), replacement.into());
    }

    /// Registers `name` as reserved using the default `_provider` suffix
    pub fn reserve(&mut self, name: &str) {
        self.insert(name, format!("{}{}", name, RESERVED_NAME_SUFFIX));
    }

    /// Returns the replacement segment if `name` is reserved
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, replacement)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for ReservedNameTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for name in DEFAULT_RESERVED_NAMES {
            table.reserve(name);
        }
        table
    }
}
