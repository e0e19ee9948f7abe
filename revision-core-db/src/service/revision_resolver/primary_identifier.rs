use revision_core_api::{RevisionError, RevisionResult};

use super::resolver_impl::RevisionResolver;
use crate::models::revision::RevisionModel;
use crate::models::revision_metadata::RevisionMetadata;

impl RevisionResolver {
    /// Current value of the owning entity's primary identifier.
    ///
    /// `alternative` overrides the identifier declared in the owning type's
    /// metadata. Returns `Ok(None)` when no identifier applies or the entity
    /// cannot be loaded. A loaded entity that lacks the configured attribute
    /// is a configuration error and is returned as
    /// [`RevisionError::PrimaryIdentifierNotSet`].
    pub async fn primary_identifier_value(
        &self,
        revision: &RevisionModel,
        alternative: Option<&str>,
    ) -> RevisionResult<Option<String>> {
        let Some((owner, metadata)) = self.owner(revision) else {
            return Ok(None);
        };
        let Some(identifier) = configured_identifier(&metadata, alternative) else {
            return Ok(None);
        };

        let record = match owner.find_with_trashed(&revision.owner_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(None),
            Err(e) => {
                self.observer
                    .degraded(revision, &RevisionError::Lookup(e.to_string()));
                return Ok(None);
            }
        };

        record
            .attribute(&identifier)
            .map(Some)
            .ok_or_else(|| RevisionError::PrimaryIdentifierNotSet {
                identifier,
                owner_type: revision.owner_type.to_string(),
            })
    }

    /// Display name of the primary identifier, following the same override
    /// rules as [`RevisionResolver::field_name`]
    pub fn primary_identifier_name(
        &self,
        revision: &RevisionModel,
        alternative: Option<&str>,
    ) -> Option<String> {
        let metadata = self.owner(revision).map(|(_, metadata)| metadata);
        let identifier = match (alternative, &metadata) {
            (Some(identifier), _) => non_blank(identifier)?,
            (None, Some(metadata)) => configured_identifier(metadata, None)?,
            (None, None) => return None,
        };
        Some(self.field_name_for(metadata.as_deref(), &identifier))
    }
}

/// `alternative` when given, else the declared identifier. Blank names count as unset.
fn configured_identifier(metadata: &RevisionMetadata, alternative: Option<&str>) -> Option<String> {
    match alternative {
        Some(identifier) => non_blank(identifier),
        None => metadata.primary_identifier.as_deref().and_then(non_blank),
    }
}

fn non_blank(identifier: &str) -> Option<String> {
    let identifier = identifier.trim();
    (!identifier.is_empty()).then(|| identifier.to_string())
}
