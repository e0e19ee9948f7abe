use async_trait::async_trait;
use chrono::Utc;
use heapless::String as HeaplessString;
use revision_core_api::{RevisionAction, RevisionError, RevisionResult};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::models::revision::RevisionModel;
use crate::models::revision_metadata::RevisionMetadata;
use crate::revisionable::entity::{BoxError, RelationDescriptor, RevisionableRecord, RevisionableType};
use crate::service::observer::ResolutionObserver;

type ValueMutator = Box<dyn Fn(Option<&str>) -> RevisionResult<String> + Send + Sync>;
type DisplayMutator = Box<dyn Fn(&dyn RevisionableRecord) -> RevisionResult<String> + Send + Sync>;

pub fn create_test_revision(owner_type: &str, owner_id: &str, key: &str) -> RevisionModel {
    RevisionModel {
        id: Uuid::new_v4(),
        owner_type: HeaplessString::try_from(owner_type).unwrap(),
        owner_id: HeaplessString::try_from(owner_id).unwrap(),
        key: HeaplessString::try_from(key).unwrap(),
        old_value: None,
        new_value: None,
        actor_id: None,
        action: RevisionAction::Update.code(),
        created_at: Utc::now(),
    }
}

pub fn create_test_change(
    owner_type: &str,
    key: &str,
    old_value: Option<&str>,
    new_value: Option<&str>,
) -> RevisionModel {
    let mut revision = create_test_revision(owner_type, "1", key);
    revision.old_value = old_value.map(str::to_string);
    revision.new_value = new_value.map(str::to_string);
    revision
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRecord {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

impl MemoryRecord {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl RevisionableRecord for MemoryRecord {
    fn identifiable_name(&self) -> String {
        self.name.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// In-memory entity type with lookup counters
#[derive(Default)]
pub struct MemoryEntityType {
    pub name: String,
    pub metadata: RevisionMetadata,
    pub relations: HashMap<String, String>,
    pub broken_relations: HashSet<String>,
    pub records: HashMap<String, MemoryRecord>,
    pub trashed: HashMap<String, MemoryRecord>,
    pub revision_values: HashMap<String, ValueMutator>,
    pub value_accessors: HashMap<String, ValueMutator>,
    pub revision_displays: HashMap<String, DisplayMutator>,
    pub display_accessors: HashMap<String, DisplayMutator>,
    pub summaries: HashMap<i16, String>,
    pub fail_lookups: bool,
    pub lookups: AtomicUsize,
    pub metadata_calls: AtomicUsize,
}

impl MemoryEntityType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: RevisionMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_relation(mut self, name: &str, target_type: &str) -> Self {
        self.relations.insert(name.to_string(), target_type.to_string());
        self
    }

    /// Relation accessor that errors when probed
    pub fn with_broken_relation(mut self, name: &str) -> Self {
        self.broken_relations.insert(name.to_string());
        self
    }

    pub fn with_record(mut self, id: &str, record: MemoryRecord) -> Self {
        self.records.insert(id.to_string(), record);
        self
    }

    pub fn with_trashed_record(mut self, id: &str, record: MemoryRecord) -> Self {
        self.trashed.insert(id.to_string(), record);
        self
    }

    pub fn with_revision_value(
        mut self,
        key: &str,
        f: impl Fn(Option<&str>) -> RevisionResult<String> + Send + Sync + 'static,
    ) -> Self {
        self.revision_values.insert(key.to_string(), Box::new(f));
        self
    }

    pub fn with_value_accessor(
        mut self,
        key: &str,
        f: impl Fn(Option<&str>) -> RevisionResult<String> + Send + Sync + 'static,
    ) -> Self {
        self.value_accessors.insert(key.to_string(), Box::new(f));
        self
    }

    pub fn with_revision_display(
        mut self,
        key: &str,
        f: impl Fn(&dyn RevisionableRecord) -> RevisionResult<String> + Send + Sync + 'static,
    ) -> Self {
        self.revision_displays.insert(key.to_string(), Box::new(f));
        self
    }

    pub fn with_display_accessor(
        mut self,
        key: &str,
        f: impl Fn(&dyn RevisionableRecord) -> RevisionResult<String> + Send + Sync + 'static,
    ) -> Self {
        self.display_accessors.insert(key.to_string(), Box::new(f));
        self
    }

    pub fn with_summary(mut self, action: RevisionAction, summary: &str) -> Self {
        self.summaries.insert(action.code(), summary.to_string());
        self
    }

    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RevisionableType for MemoryEntityType {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn revision_metadata(&self) -> RevisionMetadata {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.metadata.clone()
    }

    fn relation(&self, name: &str) -> RevisionResult<Option<RelationDescriptor>> {
        if self.broken_relations.contains(name) {
            return Err(RevisionError::Lookup(format!(
                "accessor {name} on {} was removed",
                self.name
            )));
        }
        Ok(self
            .relations
            .get(name)
            .map(|target| RelationDescriptor::new(name, target)))
    }

    fn revision_value(&self, key: &str, raw: Option<&str>) -> RevisionResult<Option<String>> {
        self.revision_values.get(key).map(|f| f(raw)).transpose()
    }

    fn value_accessor(&self, key: &str, raw: Option<&str>) -> RevisionResult<Option<String>> {
        self.value_accessors.get(key).map(|f| f(raw)).transpose()
    }

    fn revision_display(
        &self,
        key: &str,
        record: &dyn RevisionableRecord,
    ) -> RevisionResult<Option<String>> {
        self.revision_displays.get(key).map(|f| f(record)).transpose()
    }

    fn display_accessor(
        &self,
        key: &str,
        record: &dyn RevisionableRecord,
    ) -> RevisionResult<Option<String>> {
        self.display_accessors.get(key).map(|f| f(record)).transpose()
    }

    fn revision_string(&self, _revision: &RevisionModel, action: RevisionAction) -> Option<String> {
        self.summaries.get(&action.code()).cloned()
    }

    async fn find(&self, id: &str) -> Result<Option<Box<dyn RevisionableRecord>>, BoxError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups {
            return Err("connection refused".into());
        }
        Ok(self
            .records
            .get(id)
            .cloned()
            .map(|r| Box::new(r) as Box<dyn RevisionableRecord>))
    }

    async fn find_with_trashed(
        &self,
        id: &str,
    ) -> Result<Option<Box<dyn RevisionableRecord>>, BoxError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups {
            return Err("connection refused".into());
        }
        Ok(self
            .records
            .get(id)
            .or_else(|| self.trashed.get(id))
            .cloned()
            .map(|r| Box::new(r) as Box<dyn RevisionableRecord>))
    }
}

/// Observer that keeps every degraded resolution for inspection
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<(String, RevisionError)>>,
}

impl RecordingObserver {
    pub fn errors(&self) -> Vec<RevisionError> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(_, e)| e.clone())
            .collect()
    }
}

impl ResolutionObserver for RecordingObserver {
    fn degraded(&self, revision: &RevisionModel, error: &RevisionError) {
        self.events
            .lock()
            .unwrap()
            .push((revision.key.to_string(), error.clone()));
    }
}
