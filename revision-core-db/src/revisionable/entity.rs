use async_trait::async_trait;
use revision_core_api::{RevisionAction, RevisionResult};
use serde::{Deserialize, Serialize};

use crate::models::revision::RevisionModel;
use crate::models::revision_metadata::RevisionMetadata;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A loaded instance of a revisionable entity
pub trait RevisionableRecord: Send + Sync {
    /// Human readable name of this instance, e.g. its name or title
    fn identifiable_name(&self) -> String;

    /// Value of the named attribute, `None` when it is absent or null
    fn attribute(&self, name: &str) -> Option<String>;
}

/// A relation accessor on an entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Accessor name, e.g. `publishedStatus`
    pub name: String,
    /// Registry discriminator of the related entity type
    pub target_type: String,
}

impl RelationDescriptor {
    pub fn new(name: &str, target_type: &str) -> Self {
        Self {
            name: name.to_string(),
            target_type: target_type.to_string(),
        }
    }
}

/// Capabilities an entity type exposes to the revision resolver.
///
/// Only [`RevisionableType::type_name`], [`RevisionableType::revision_metadata`]
/// and [`RevisionableType::find`] are required. Every optional hook returns
/// `Ok(None)` by default, which means "not declared".
#[async_trait]
pub trait RevisionableType: Send + Sync {
    /// Discriminator stored in `RevisionModel::owner_type`
    fn type_name(&self) -> &str;

    fn revision_metadata(&self) -> RevisionMetadata;

    /// Relation accessor named `name`, if this type declares one
    fn relation(&self, _name: &str) -> RevisionResult<Option<RelationDescriptor>> {
        Ok(None)
    }

    /// Revision specific mutator for a raw value of this type's field `key`
    fn revision_value(&self, _key: &str, _raw: Option<&str>) -> RevisionResult<Option<String>> {
        Ok(None)
    }

    /// General purpose accessor mutator for a raw value of this type's field `key`
    fn value_accessor(&self, _key: &str, _raw: Option<&str>) -> RevisionResult<Option<String>> {
        Ok(None)
    }

    /// Revision specific display of `record` when it is referenced through `key`
    fn revision_display(
        &self,
        _key: &str,
        _record: &dyn RevisionableRecord,
    ) -> RevisionResult<Option<String>> {
        Ok(None)
    }

    /// General purpose display of `record` when it is referenced through `key`
    fn display_accessor(
        &self,
        _key: &str,
        _record: &dyn RevisionableRecord,
    ) -> RevisionResult<Option<String>> {
        Ok(None)
    }

    /// Summary line for create, insert and update revisions of this type
    fn revision_string(&self, _revision: &RevisionModel, _action: RevisionAction) -> Option<String> {
        None
    }

    /// Loads a live instance by primary key
    async fn find(&self, id: &str) -> Result<Option<Box<dyn RevisionableRecord>>, BoxError>;

    /// Loads an instance by primary key, including soft deleted ones
    async fn find_with_trashed(
        &self,
        id: &str,
    ) -> Result<Option<Box<dyn RevisionableRecord>>, BoxError> {
        self.find(id).await
    }
}
