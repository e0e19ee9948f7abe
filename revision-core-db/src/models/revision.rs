use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use revision_core_api::RevisionAction;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identifiable::Identifiable;
use super::owner::OwnerReference;

/// Which of the two stored values of a revision to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSide {
    Old,
    New,
}

/// # Documentation
/// - One row per single-field change, or one row per whole-entity create/delete.
/// - Written once by the persistence layer when a tracked mutation happens; never updated.
/// - `owner_type` + `owner_id` point back to the mutated entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionModel {
    pub id: Uuid,

    /// Discriminator of the mutated entity's type
    pub owner_type: HeaplessString<100>,

    /// Primary key of the mutated entity, in text form
    pub owner_id: HeaplessString<100>,

    /// Name of the changed field
    pub key: HeaplessString<100>,

    pub old_value: Option<String>,
    pub new_value: Option<String>,

    /// Principal responsible for the change, if known
    pub actor_id: Option<Uuid>,

    /// Raw action code, see [`RevisionAction::code`]
    pub action: i16,

    pub created_at: DateTime<Utc>,
}

impl RevisionModel {
    /// Recognised action, or `None` for codes written by a newer or foreign writer
    pub fn action(&self) -> Option<RevisionAction> {
        RevisionAction::from_code(self.action)
    }

    pub fn value(&self, side: ValueSide) -> Option<&str> {
        match side {
            ValueSide::Old => self.old_value.as_deref(),
            ValueSide::New => self.new_value.as_deref(),
        }
    }

    pub fn owner(&self) -> OwnerReference {
        OwnerReference {
            owner_type: self.owner_type.clone(),
            owner_id: self.owner_id.clone(),
        }
    }
}

impl Identifiable for RevisionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
