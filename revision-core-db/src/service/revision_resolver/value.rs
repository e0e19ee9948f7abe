use revision_core_api::{is_foreign_key, relation_candidates, FieldFormatter, RevisionError, RevisionResult};

use super::resolver_impl::{ResolvedOwner, RevisionResolver};
use crate::models::revision::{RevisionModel, ValueSide};
use crate::models::revision_metadata::RevisionMetadata;
use crate::revisionable::entity::{RelationDescriptor, RevisionableType};

impl RevisionResolver {
    pub async fn old_value(&self, revision: &RevisionModel) -> String {
        self.value(revision, ValueSide::Old).await
    }

    pub async fn new_value(&self, revision: &RevisionModel) -> String {
        self.value(revision, ValueSide::New).await
    }

    /// Display value of one side of a revision.
    ///
    /// Foreign-key shaped keys are dereferenced into the related record's
    /// display name. Anything that fails along the way falls back to the
    /// plain value path.
    pub async fn value(&self, revision: &RevisionModel, side: ValueSide) -> String {
        let owner = self.owner(revision);
        self.value_with(revision, side, owner.as_ref()).await
    }

    /// [`RevisionResolver::value`] with the owning type already resolved
    pub(crate) async fn value_with(
        &self,
        revision: &RevisionModel,
        side: ValueSide,
        owner: Option<&ResolvedOwner>,
    ) -> String {
        let raw = revision.value(side);
        let key = revision.key.as_str();

        let Some((owner, metadata)) = owner else {
            return raw.unwrap_or_default().to_string();
        };

        if is_foreign_key(key, &self.config.foreign_key_suffix) {
            match self.related_value(owner.as_ref(), metadata, key, raw).await {
                Ok(value) => return value,
                Err(e) => self.observer.degraded(revision, &e),
            }
        }

        match plain_value(owner.as_ref(), key, raw) {
            Ok(value) => FieldFormatter::format(key, &value, &metadata.formatted_fields),
            Err(e) => {
                self.observer.degraded(revision, &e);
                FieldFormatter::format_optional(key, raw, &metadata.formatted_fields)
            }
        }
    }

    async fn related_value(
        &self,
        owner: &dyn RevisionableType,
        metadata: &RevisionMetadata,
        key: &str,
        raw: Option<&str>,
    ) -> RevisionResult<String> {
        let relation = self.find_relation(owner, key)?;
        let related = self
            .registry
            .get(&relation.target_type)
            .map_err(|_| RevisionError::RelatedTypeNotRegistered(relation.target_type.clone()))?;
        let related_metadata = self.registry.metadata(&relation.target_type)?;

        // An empty reference means "none", not "missing"
        let id = match raw {
            Some(id) if !id.is_empty() => id,
            _ => return Ok(self.null_string(&related_metadata)),
        };

        let record = related
            .find(id)
            .await
            .map_err(|e| RevisionError::Lookup(e.to_string()))?;
        let Some(record) = record else {
            let unknown = self.unknown_string(&related_metadata);
            return Ok(FieldFormatter::format(key, &unknown, &metadata.formatted_fields));
        };

        let display = match related.revision_display(key, record.as_ref())? {
            Some(display) => display,
            None => match related.display_accessor(key, record.as_ref())? {
                Some(display) => display,
                None => record.identifiable_name(),
            },
        };
        Ok(FieldFormatter::format(key, &display, &metadata.formatted_fields))
    }

    /// Tries the stripped relation name, then its camel case form
    fn find_relation(&self, owner: &dyn RevisionableType, key: &str) -> RevisionResult<RelationDescriptor> {
        let candidates = relation_candidates(key, &self.config.foreign_key_suffix);
        for candidate in &candidates {
            if let Some(relation) = owner.relation(candidate)? {
                return Ok(relation);
            }
        }
        Err(RevisionError::RelationNotFound {
            relation: candidates.last().cloned().unwrap_or_else(|| key.to_string()),
            owner_type: owner.type_name().to_string(),
        })
    }
}

fn plain_value(owner: &dyn RevisionableType, key: &str, raw: Option<&str>) -> RevisionResult<String> {
    if let Some(value) = owner.revision_value(key, raw)? {
        return Ok(value);
    }
    if let Some(value) = owner.value_accessor(key, raw)? {
        return Ok(value);
    }
    Ok(raw.unwrap_or_default().to_string())
}
