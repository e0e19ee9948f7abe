use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// # Documentation
/// Per entity type settings that drive how its revisions are displayed.
///
/// - `formatted_field_names`: raw field key -> display label
/// - `formatted_fields`: raw field key -> formatting directive (`boolean:Yes|No`, `string:Min: %s`, ...)
/// - `class_display_name`: display name of the entity type, defaults to its discriminator
/// - `primary_identifier`: field holding a human meaningful identifier
/// - `null_string` / `unknown_string`: fallbacks used when this type is the
///   target of a reference that is empty or dangling. When unset the
///   resolver's configured defaults apply.
///
/// Can be declared in JSON:
///
/// ```
/// use revision_core_db::RevisionMetadata;
///
/// let metadata: RevisionMetadata = serde_json::from_str(r#"{
///     "formatted_field_names": {"author_id": "Author"},
///     "formatted_fields": {"public": "boolean:Yes|No"},
///     "null_string": "(none)"
/// }"#).unwrap();
/// assert_eq!(metadata.formatted_field_names["author_id"], "Author");
/// assert!(metadata.unknown_string.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionMetadata {
    pub formatted_field_names: HashMap<String, String>,
    pub formatted_fields: HashMap<String, String>,
    pub class_display_name: Option<String>,
    pub primary_identifier: Option<String>,
    pub null_string: Option<String>,
    pub unknown_string: Option<String>,
}

impl RevisionMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_name(mut self, key: &str, label: &str) -> Self {
        self.formatted_field_names
            .insert(key.to_string(), label.to_string());
        self
    }

    pub fn with_formatted_field(mut self, key: &str, directive: &str) -> Self {
        self.formatted_fields
            .insert(key.to_string(), directive.to_string());
        self
    }

    pub fn with_class_display_name(mut self, name: &str) -> Self {
        self.class_display_name = Some(name.to_string());
        self
    }

    pub fn with_primary_identifier(mut self, key: &str) -> Self {
        self.primary_identifier = Some(key.to_string());
        self
    }

    pub fn with_null_string(mut self, value: &str) -> Self {
        self.null_string = Some(value.to_string());
        self
    }

    pub fn with_unknown_string(mut self, value: &str) -> Self {
        self.unknown_string = Some(value.to_string());
        self
    }
}
