use revision_core_api::RevisionError;

use crate::models::revision::RevisionModel;

/// Port notified whenever a resolution falls back to a degraded display value
pub trait ResolutionObserver: Send + Sync {
    fn degraded(&self, revision: &RevisionModel, error: &RevisionError);
}

/// Emits one `tracing` event per degraded resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn degraded(&self, revision: &RevisionModel, error: &RevisionError) {
        tracing::info!(
            revision_id = %revision.id,
            owner_type = %revision.owner_type,
            owner_id = %revision.owner_id,
            key = %revision.key,
            error = %error,
            "Revisionable: falling back to degraded value"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {
    fn degraded(&self, _revision: &RevisionModel, _error: &RevisionError) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revisionable::registry::EntityRegistry;
    use crate::service::revision_resolver::RevisionResolver;
    use crate::test_utils::create_test_change;
    use revision_core_api::ResolverConfig;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_noop_observer_still_degrades() {
        let resolver = RevisionResolver::new(Arc::new(EntityRegistry::new()), ResolverConfig::default())
            .with_observer(Arc::new(NoopObserver));
        let revision = create_test_change("Ghost", "author_id", None, Some("7"));
        assert_eq!(resolver.new_value(&revision).await, "7");
        assert_eq!(resolver.old_value(&revision).await, "");
        assert_eq!(resolver.field_name(&revision), "author");
    }
}
