use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polymorphic reference from a revision to the entity it describes.
///
/// `owner_type` is the discriminator an entity type is registered under in
/// the `EntityRegistry`; `owner_id` is that entity's primary key in text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerReference {
    pub owner_type: HeaplessString<100>,
    pub owner_id: HeaplessString<100>,
}

impl OwnerReference {
    pub fn new(owner_type: &str, owner_id: &str) -> Result<Self, String> {
        Ok(Self {
            owner_type: HeaplessString::try_from(owner_type)
                .map_err(|_| format!("Owner type '{owner_type}' is too long (max 100 chars)"))?,
            owner_id: HeaplessString::try_from(owner_id)
                .map_err(|_| format!("Owner id '{owner_id}' is too long (max 100 chars)"))?,
        })
    }
}

impl fmt::Display for OwnerReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.owner_type, self.owner_id)
    }
}
