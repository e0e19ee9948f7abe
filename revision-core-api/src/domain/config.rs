use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{RevisionError, RevisionResult};

pub const DEFAULT_FOREIGN_KEY_SUFFIX: &str = "_id";
pub const DEFAULT_NULL_STRING: &str = "nothing";
pub const DEFAULT_UNKNOWN_STRING: &str = "unknown";
pub const UNKNOWN_REVISION_STRING: &str = "created unknown revision";

/// Settings for the revision resolver.
///
/// Every field has a default so a partial JSON document is enough:
///
/// ```
/// use revision_core_api::ResolverConfig;
///
/// let config: ResolverConfig = serde_json::from_str(r#"{"foreign_key_suffix": "_ref"}"#).unwrap();
/// assert_eq!(config.foreign_key_suffix, "_ref");
/// assert_eq!(config.default_null_string, "nothing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ResolverConfig {
    /// Suffix marking a field as a reference to another entity
    #[validate(length(min = 1))]
    pub foreign_key_suffix: String,

    /// Fallback used when an entity type does not declare its own null string
    pub default_null_string: String,

    /// Fallback used when an entity type does not declare its own unknown string
    pub default_unknown_string: String,

    /// Summary rendered for revisions whose action code is not recognised
    pub unknown_revision_string: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            foreign_key_suffix: DEFAULT_FOREIGN_KEY_SUFFIX.to_string(),
            default_null_string: DEFAULT_NULL_STRING.to_string(),
            default_unknown_string: DEFAULT_UNKNOWN_STRING.to_string(),
            unknown_revision_string: UNKNOWN_REVISION_STRING.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Returns the config unchanged if it passes validation
    pub fn validated(self) -> RevisionResult<Self> {
        self.validate()
            .map_err(|e| RevisionError::ValidationError(e.to_string()))?;
        Ok(self)
    }
}
