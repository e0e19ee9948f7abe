use revision_core_api::RevisionAction;

use super::resolver_impl::{class_name_for, ResolvedOwner, RevisionResolver};
use crate::models::revision::RevisionModel;

impl RevisionResolver {
    /// One line summary of a revision.
    ///
    /// Delete and remove always render `"<label> (<class name>) ID:<owner id>"`.
    /// Create, insert and update ask the owning type's `revision_string` hook
    /// first and fall back to the same shape.
    pub fn revision_string(&self, revision: &RevisionModel) -> String {
        if revision.action().is_none() {
            return self.config.unknown_revision_string.clone();
        }
        let owner = self.owner(revision);
        self.revision_string_with(revision, owner.as_ref())
    }

    pub(crate) fn revision_string_with(&self, revision: &RevisionModel, owner: Option<&ResolvedOwner>) -> String {
        let Some(action) = revision.action() else {
            return self.config.unknown_revision_string.clone();
        };
        let class_name = class_name_for(revision, owner.map(|(_, metadata)| metadata.as_ref()));

        match action {
            RevisionAction::Delete | RevisionAction::Remove => {
                entity_line(action, &class_name, &revision.owner_id)
            }
            RevisionAction::Create | RevisionAction::Insert | RevisionAction::Update => owner
                .and_then(|(owner, _)| owner.revision_string(revision, action))
                .unwrap_or_else(|| entity_line(action, &class_name, &revision.owner_id)),
        }
    }
}

fn entity_line(action: RevisionAction, class_name: &str, owner_id: &str) -> String {
    format!("{} ({}) ID:{}", action.label(), class_name, owner_id)
}
