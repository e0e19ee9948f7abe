use revision_core_db::revisionable::entity::RevisionableRecord;
use serde_json::{Map, Value};

/// A row loaded as JSON, with every column readable as text
#[derive(Debug, Clone, PartialEq)]
pub struct TableRecord {
    columns: Map<String, Value>,
    display_column: String,
}

impl TableRecord {
    pub fn from_json(row: &str, display_column: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            columns: serde_json::from_str(row)?,
            display_column: display_column.to_string(),
        })
    }
}

fn column_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl RevisionableRecord for TableRecord {
    fn identifiable_name(&self) -> String {
        self.attribute(&self.display_column).unwrap_or_default()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.columns.get(name).and_then(column_text)
    }
}
