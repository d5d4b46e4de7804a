//! In-memory implementation of the url mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{StoreError, UrlMappingRepository};

/// Process-local repository backed by a [`DashMap`].
///
/// Conditional inserts go through the map's entry API, so two concurrent
/// inserts of the same code cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryUrlMappingRepository {
    storage: DashMap<String, UrlMapping>,
}

impl InMemoryUrlMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl UrlMappingRepository for InMemoryUrlMappingRepository {
    async fn insert_if_absent(
        &self,
        new_mapping: NewUrlMapping,
    ) -> Result<Option<UrlMapping>, StoreError> {
        match self.storage.entry(new_mapping.code.clone()) {
            Entry::Occupied(_) => Ok(None),
            Entry::Vacant(slot) => {
                let mapping =
                    UrlMapping::new(new_mapping.code, new_mapping.original_url, Utc::now());
                slot.insert(mapping.clone());
                Ok(Some(mapping))
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
