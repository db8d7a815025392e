//! Shared document store
//!
//!     Editors and tools hold on to a parsed file while its text keeps changing.
//!     The store maps a key (usually a path) to a shared `Arc<RwLock<Document>>`.
//!     A reparse builds the new model completely before taking the write lock and
//!     swapping it in, so readers see either the old model or the new one and
//!     holders of the `Arc` keep a valid handle across reparses.
//!
//!     Watching files for changes is left to the caller.

use crate::robot::model::Document;
use crate::robot::tokenizing::Dialect;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

pub type SharedDocument = Arc<RwLock<Document>>;

#[derive(Default)]
pub struct DocumentStore {
    entries: RwLock<HashMap<String, SharedDocument>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and store it under `key`, replacing any earlier entry.
    pub fn open(&self, key: impl Into<String>, text: &str, dialect: Dialect) -> SharedDocument {
        let key = key.into();
        let document = Arc::new(RwLock::new(Document::parse(text, dialect)));
        debug!(%key, %dialect, "document opened");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&document));
        document
    }

    pub fn get(&self, key: &str) -> Option<SharedDocument> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Replace the model under `key` with a parse of `text`, keeping its
    /// dialect. Returns false when nothing is stored under `key`.
    pub fn reparse(&self, key: &str, text: &str) -> bool {
        let Some(shared) = self.get(key) else {
            return false;
        };
        let dialect = shared
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .dialect();
        let fresh = Document::parse(text, dialect);
        *shared.write().unwrap_or_else(PoisonError::into_inner) = fresh;
        debug!(%key, "document reparsed");
        true
    }

    pub fn remove(&self, key: &str) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::model::ViewKey;
    use std::thread;

    const BEFORE: &str = "*** Keywords ***\nOld Keyword\n    No Operation\n";
    const AFTER: &str = "*** Settings ***\nLibrary    x.py\n*** Keywords ***\nNew Keyword\n    No Operation\n";

    #[test]
    fn test_open_get_remove() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        store.open("a.robot", BEFORE, Dialect::SpaceSeparated);
        assert_eq!(store.len(), 1);
        assert!(store.get("a.robot").is_some());
        assert!(store.get("b.robot").is_none());
        assert!(store.remove("a.robot"));
        assert!(!store.remove("a.robot"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reparse_keeps_handle_and_replaces_cache() {
        let store = DocumentStore::new();
        let handle = store.open("a.robot", BEFORE, Dialect::SpaceSeparated);
        {
            let doc = handle.read().unwrap();
            assert!(doc.keyword_map().contains_key("Old Keyword"));
            assert!(doc.views().is_populated(ViewKey::KeywordMap));
        }

        assert!(store.reparse("a.robot", AFTER));

        let doc = handle.read().unwrap();
        assert!(!doc.views().is_populated(ViewKey::KeywordMap));
        assert!(doc.keyword_map().contains_key("New Keyword"));
        assert!(!doc.keyword_map().contains_key("Old Keyword"));
        assert_eq!(doc.libraries(), ["x.py"]);
        assert_eq!(doc.dialect(), Dialect::SpaceSeparated);
    }

    #[test]
    fn test_reparse_unknown_key() {
        let store = DocumentStore::new();
        assert!(!store.reparse("missing.robot", AFTER));
    }

    #[test]
    fn test_readers_see_whole_models() {
        let store = Arc::new(DocumentStore::new());
        let handle = store.open("a.robot", BEFORE, Dialect::SpaceSeparated);

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50 {
                    store.reparse("a.robot", if i % 2 == 0 { AFTER } else { BEFORE });
                }
            })
        };
        for _ in 0..50 {
            let doc = handle.read().unwrap();
            let tables = doc.table_ids().len();
            let has_library = !doc.libraries().is_empty();
            // AFTER has two tables and a library, BEFORE has one table and none
            assert_eq!(tables == 2, has_library);
        }
        writer.join().unwrap();
    }
}
