use chrono::Utc;
use heapless::String as HeaplessString;
use revision_core_api::RevisionAction;
use revision_core_db::models::revision::RevisionModel;
use uuid::Uuid;

pub fn create_test_revision(owner_type: &str, owner_id: &str, key: &str) -> RevisionModel {
    RevisionModel {
        id: Uuid::new_v4(),
        owner_type: HeaplessString::try_from(owner_type).unwrap(),
        owner_id: HeaplessString::try_from(owner_id).unwrap(),
        key: HeaplessString::try_from(key).unwrap(),
        old_value: Some("before".to_string()),
        new_value: Some("after".to_string()),
        actor_id: Some(Uuid::new_v4()),
        action: RevisionAction::Update.code(),
        created_at: Utc::now(),
    }
}
