use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identifiable::Identifiable;

/// # Documentation
/// - The principal responsible for a revision.
/// - Resolved from `RevisionModel::actor_id` through an identity provider or
///   a configured user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorModel {
    pub id: Uuid,

    /// Human readable name shown in history views
    pub display_name: HeaplessString<100>,

    pub email: Option<HeaplessString<255>>,
}

impl Identifiable for ActorModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
