use chrono::{DateTime, Utc};
use revision_core_api::RevisionAction;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::resolver_impl::{class_name_for, RevisionResolver};
use crate::models::revision::{RevisionModel, ValueSide};

/// Display-ready rendering of one revision, as consumed by history views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionView {
    pub id: Uuid,
    pub owner_type: String,
    pub owner_id: String,
    pub class_name: String,
    pub key: String,
    pub field_name: String,
    pub old_value: String,
    pub new_value: String,
    pub summary: String,
    pub action: Option<RevisionAction>,
    pub actor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl RevisionResolver {
    /// Renders every display field of `revision`, resolving its owning type once
    pub async fn describe(&self, revision: &RevisionModel) -> RevisionView {
        let owner = self.owner(revision);
        let metadata = owner.as_ref().map(|(_, metadata)| metadata.as_ref());
        RevisionView {
            id: revision.id,
            owner_type: revision.owner_type.to_string(),
            owner_id: revision.owner_id.to_string(),
            class_name: class_name_for(revision, metadata),
            key: revision.key.to_string(),
            field_name: self.field_name_for(metadata, &revision.key),
            old_value: self.value_with(revision, ValueSide::Old, owner.as_ref()).await,
            new_value: self.value_with(revision, ValueSide::New, owner.as_ref()).await,
            summary: self.revision_string_with(revision, owner.as_ref()),
            action: revision.action(),
            actor_id: revision.actor_id,
            created_at: revision.created_at,
        }
    }

    /// Describes a page of history in order
    pub async fn describe_all(&self, revisions: &[RevisionModel]) -> Vec<RevisionView> {
        let mut views = Vec::with_capacity(revisions.len());
        for revision in revisions {
            views.push(self.describe(revision).await);
        }
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::revision_metadata::RevisionMetadata;
    use crate::revisionable::registry::EntityRegistry;
    use crate::test_utils::{create_test_change, MemoryEntityType, MemoryRecord, RecordingObserver};
    use revision_core_api::RevisionError;
    use revision_core_api::ResolverConfig;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_describe_update() {
        let mut registry = EntityRegistry::new();
        registry.register(Arc::new(
            MemoryEntityType::new("Post")
                .with_metadata(
                    RevisionMetadata::new()
                        .with_class_display_name("Article")
                        .with_field_name("author_id", "Author"),
                )
                .with_relation("author", "User"),
        ));
        registry.register(Arc::new(
            MemoryEntityType::new("User")
                .with_record("1", MemoryRecord::named("Grace"))
                .with_record("2", MemoryRecord::named("Ada")),
        ));
        let resolver = RevisionResolver::new(Arc::new(registry), ResolverConfig::default());

        let revision = create_test_change("Post", "author_id", Some("1"), Some("2"));
        let view = resolver.describe(&revision).await;

        assert_eq!(view.class_name, "Article");
        assert_eq!(view.field_name, "Author");
        assert_eq!(view.old_value, "Grace");
        assert_eq!(view.new_value, "Ada");
        assert_eq!(view.action, Some(RevisionAction::Update));
        assert_eq!(view.summary, "changed (Article) ID:1");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["action"], "UPDATE");
        assert_eq!(json["new_value"], "Ada");
    }

    #[tokio::test]
    async fn test_describe_unregistered_owner_reports_once() {
        let observer = Arc::new(RecordingObserver::default());
        let resolver = RevisionResolver::new(Arc::new(EntityRegistry::new()), ResolverConfig::default())
            .with_observer(observer.clone());

        let revision = create_test_change("Ghost", "author_id", Some("1"), Some("2"));
        let view = resolver.describe(&revision).await;

        assert_eq!(view.class_name, "Ghost");
        assert_eq!(view.field_name, "author");
        assert_eq!(view.old_value, "1");
        assert_eq!(view.new_value, "2");
        assert_eq!(view.summary, "changed (Ghost) ID:1");
        assert_eq!(
            observer.errors(),
            vec![RevisionError::UnknownEntityType("Ghost".to_string())]
        );
    }

    #[tokio::test]
    async fn test_describe_all_keeps_order() {
        let mut registry = EntityRegistry::new();
        registry.register(Arc::new(MemoryEntityType::new("Post")));
        let resolver = RevisionResolver::new(Arc::new(registry), ResolverConfig::default());

        let revisions = vec![
            create_test_change("Post", "title", Some("a"), Some("b")),
            create_test_change("Post", "title", Some("b"), Some("c")),
        ];
        let views = resolver.describe_all(&revisions).await;
        let values: Vec<&str> = views.iter().map(|v| v.new_value.as_str()).collect();
        assert_eq!(values, vec!["b", "c"]);
    }
}
