use revision_core_api::{relation_name, FieldFormatter, ResolverConfig, RevisionResult};
use std::sync::Arc;

use crate::models::actor::ActorModel;
use crate::models::revision::RevisionModel;
use crate::models::revision_metadata::RevisionMetadata;
use crate::revisionable::entity::RevisionableType;
use crate::revisionable::registry::EntityRegistry;
use crate::service::actor_resolver::ActorResolver;
use crate::service::observer::{ResolutionObserver, TracingObserver};

/// Owning entity type of a revision together with its cached metadata
pub(crate) type ResolvedOwner = (Arc<dyn RevisionableType>, Arc<RevisionMetadata>);

/// Turns stored revisions into display-ready field names, values and summaries.
///
/// Resolution is read-only and holds no state between calls. Schema drift
/// (unregistered types, renamed relations, dangling references, failing
/// mutators) is reported to the observer and degrades to a fallback string.
/// Only a misconfigured primary identifier is surfaced as an error.
pub struct RevisionResolver {
    pub(crate) registry: Arc<EntityRegistry>,
    pub(crate) observer: Arc<dyn ResolutionObserver>,
    pub(crate) actors: Option<Arc<ActorResolver>>,
    pub(crate) config: ResolverConfig,
}

impl RevisionResolver {
    pub fn new(registry: Arc<EntityRegistry>, config: ResolverConfig) -> Self {
        Self {
            registry,
            observer: Arc::new(TracingObserver),
            actors: None,
            config,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_actor_resolver(mut self, actors: Arc<ActorResolver>) -> Self {
        self.actors = Some(actors);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Owning type and its metadata, or `None` after reporting the drift
    pub(crate) fn owner(&self, revision: &RevisionModel) -> Option<ResolvedOwner> {
        let lookup = self
            .registry
            .get(&revision.owner_type)
            .and_then(|owner| Ok((owner, self.registry.metadata(&revision.owner_type)?)));
        match lookup {
            Ok(found) => Some(found),
            Err(e) => {
                self.observer.degraded(revision, &e);
                None
            }
        }
    }

    /// Display name of the changed field
    pub fn field_name(&self, revision: &RevisionModel) -> String {
        let metadata = self.owner(revision).map(|(_, metadata)| metadata);
        self.field_name_for(metadata.as_deref(), &revision.key)
    }

    pub(crate) fn field_name_for(&self, metadata: Option<&RevisionMetadata>, key: &str) -> String {
        if let Some(label) = metadata.and_then(|m| m.formatted_field_names.get(key)) {
            return label.clone();
        }
        relation_name(key, &self.config.foreign_key_suffix)
            .unwrap_or(key)
            .to_string()
    }

    /// Applies the owning type's formatting rule for `key`, if any
    pub fn format(&self, revision: &RevisionModel, key: &str, value: &str) -> String {
        match self.owner(revision) {
            Some((_, metadata)) => FieldFormatter::format(key, value, &metadata.formatted_fields),
            None => value.to_string(),
        }
    }

    /// Display name of the owning entity type
    pub fn class_name(&self, revision: &RevisionModel) -> String {
        let metadata = self.owner(revision).map(|(_, metadata)| metadata);
        class_name_for(revision, metadata.as_deref())
    }

    /// Principal responsible for the change, if an actor resolver is installed
    pub async fn user_responsible(&self, revision: &RevisionModel) -> RevisionResult<Option<ActorModel>> {
        match &self.actors {
            Some(actors) => actors.resolve(revision.actor_id).await,
            None => Ok(None),
        }
    }

    pub(crate) fn null_string(&self, metadata: &RevisionMetadata) -> String {
        metadata
            .null_string
            .clone()
            .unwrap_or_else(|| self.config.default_null_string.clone())
    }

    pub(crate) fn unknown_string(&self, metadata: &RevisionMetadata) -> String {
        metadata
            .unknown_string
            .clone()
            .unwrap_or_else(|| self.config.default_unknown_string.clone())
    }
}

pub(crate) fn class_name_for(revision: &RevisionModel, metadata: Option<&RevisionMetadata>) -> String {
    metadata
        .and_then(|metadata| metadata.class_display_name.clone())
        .unwrap_or_else(|| revision.owner_type.to_string())
}
