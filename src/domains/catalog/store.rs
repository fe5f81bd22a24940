//! The catalog store.
//!
//! Built once at startup from the literal definitions in [`data`](super::data)
//! and immutable afterwards. The store is the sole owner of all records and
//! hands out read-only references only; callers that need sorted output sort
//! explicitly on their side.

use std::collections::HashMap;

use tracing::debug;

use super::data::{PROMPT_CATALOG, PromptDef};
use super::record::PromptRecord;

/// Immutable mapping from prompt id to its metadata record.
///
/// Records are kept in definition order; `index` provides O(1) id lookup
/// into that same ordered slice.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<PromptRecord>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Build the store from the built-in catalog.
    pub fn new() -> Self {
        Self::from_definitions(PROMPT_CATALOG)
    }

    /// Build a store from an explicit definition table.
    ///
    /// Ids must be unique; a duplicate would shadow an earlier record and
    /// break the id-to-record invariant.
    pub fn from_definitions(definitions: &[PromptDef]) -> Self {
        let records: Vec<PromptRecord> = definitions.iter().map(PromptRecord::from).collect();

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let previous = index.insert(record.id.clone(), position);
            debug_assert!(previous.is_none(), "duplicate catalog id: {}", record.id);
        }

        debug!("Catalog loaded with {} prompt records", records.len());
        Self { records, index }
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&PromptRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// All records, in definition order.
    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_loads_full_catalog() {
        let store = CatalogStore::new();
        assert_eq!(store.len(), PROMPT_CATALOG.len());
        assert!(!store.is_empty());
    }

    #[test]
    fn test_get_returns_record_with_matching_id() {
        let store = CatalogStore::new();
        for def in PROMPT_CATALOG {
            let record = store.get(def.id).expect("every defined id resolves");
            assert_eq!(record.id, def.id);
        }
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = CatalogStore::new();
        assert!(store.get("nonexistent-id").is_none());
    }

    #[test]
    fn test_records_preserve_definition_order() {
        let store = CatalogStore::new();
        let ids: Vec<_> = store.records().iter().map(|r| r.id.as_str()).collect();
        let defined: Vec<_> = PROMPT_CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(ids, defined);
    }

    #[test]
    fn test_spring_boot_record_fields() {
        let store = CatalogStore::new();
        let record = store.get("create-spring-boot-java-project").unwrap();
        assert_eq!(record.title, "Create Spring Boot Java project prompt");
        assert_eq!(record.category, "development");
        assert_eq!(record.tools.len(), 12);
    }
}
