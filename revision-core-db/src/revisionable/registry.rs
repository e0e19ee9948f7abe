use moka::sync::Cache;
use revision_core_api::{RevisionError, RevisionResult};
use std::collections::HashMap;
use std::sync::Arc;

use super::entity::RevisionableType;
use crate::models::revision_metadata::RevisionMetadata;

const METADATA_CACHE_CAPACITY: u64 = 1_024;

/// Closed registry of revisionable entity types, keyed by discriminator.
///
/// Types are registered once at process start. Metadata is computed once
/// per type and cached for the lifetime of the registry.
pub struct EntityRegistry {
    types: HashMap<String, Arc<dyn RevisionableType>>,
    metadata_cache: Cache<String, Arc<RevisionMetadata>>,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            metadata_cache: Cache::new(METADATA_CACHE_CAPACITY),
        }
    }

    /// Registers `entity` under its own type name, replacing any previous entry
    pub fn register(&mut self, entity: Arc<dyn RevisionableType>) -> &mut Self {
        let name = entity.type_name().to_string();
        self.metadata_cache.invalidate(&name);
        self.types.insert(name, entity);
        self
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn get(&self, type_name: &str) -> RevisionResult<Arc<dyn RevisionableType>> {
        self.types
            .get(type_name)
            .cloned()
            .ok_or_else(|| RevisionError::UnknownEntityType(type_name.to_string()))
    }

    pub fn metadata(&self, type_name: &str) -> RevisionResult<Arc<RevisionMetadata>> {
        let entity = self.get(type_name)?;
        Ok(self
            .metadata_cache
            .get_with(type_name.to_string(), || Arc::new(entity.revision_metadata())))
    }
}
