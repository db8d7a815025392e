//! Memoized views derived from a finished document
//!
//! Every slot is computed at most once per parse. A reparse replaces the whole
//! cache, there is no per-slot invalidation. Concurrent first reads may both
//! compute a value; whichever lands first is kept and the results are equal.

use super::line::LineId;
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, HashMap};

/// Identifies a slot of the [`ViewCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    KeywordMap,
    ResourcePaths,
    VariablePaths,
    LibraryAliases,
    OrderedLibraries,
    VariableTableVars,
}

impl ViewKey {
    pub const ALL: [ViewKey; 6] = [
        ViewKey::KeywordMap,
        ViewKey::ResourcePaths,
        ViewKey::VariablePaths,
        ViewKey::LibraryAliases,
        ViewKey::OrderedLibraries,
        ViewKey::VariableTableVars,
    ];
}

#[derive(Debug, Default, Clone)]
pub struct ViewCache {
    pub(crate) keyword_map: OnceCell<HashMap<String, LineId>>,
    pub(crate) resource_paths: OnceCell<Vec<String>>,
    pub(crate) variable_paths: OnceCell<Vec<String>>,
    pub(crate) library_aliases: OnceCell<BTreeMap<String, String>>,
    pub(crate) ordered_libraries: OnceCell<Vec<String>>,
    pub(crate) variable_table_vars: OnceCell<Vec<String>>,
}

impl ViewCache {
    pub fn is_populated(&self, key: ViewKey) -> bool {
        match key {
            ViewKey::KeywordMap => self.keyword_map.get().is_some(),
            ViewKey::ResourcePaths => self.resource_paths.get().is_some(),
            ViewKey::VariablePaths => self.variable_paths.get().is_some(),
            ViewKey::LibraryAliases => self.library_aliases.get().is_some(),
            ViewKey::OrderedLibraries => self.ordered_libraries.get().is_some(),
            ViewKey::VariableTableVars => self.variable_table_vars.get().is_some(),
        }
    }

    /// Store the library views, replacing anything computed earlier.
    pub(crate) fn set_libraries(&mut self, ordered: Vec<String>, aliases: BTreeMap<String, String>) {
        self.ordered_libraries = OnceCell::with_value(ordered);
        self.library_aliases = OnceCell::with_value(aliases);
    }
}
