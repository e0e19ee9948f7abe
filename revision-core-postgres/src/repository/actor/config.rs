use serde::{Deserialize, Serialize};

use crate::utils::{quote_identifier, SqlIdentifierError};

fn default_id_column() -> String {
    "id".to_string()
}

/// Where the application keeps its users.
///
/// ```
/// use revision_core_postgres::ActorTableConfig;
///
/// let config: ActorTableConfig = serde_json::from_str(
///     r#"{"table": "auth.users", "display_name_column": "full_name"}"#,
/// ).unwrap();
/// assert_eq!(config.id_column, "id");
/// assert!(config.email_column.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorTableConfig {
    pub table: String,
    #[serde(default = "default_id_column")]
    pub id_column: String,
    pub display_name_column: String,
    #[serde(default)]
    pub email_column: Option<String>,
}

impl ActorTableConfig {
    pub fn new(table: &str, display_name_column: &str) -> Self {
        Self {
            table: table.to_string(),
            id_column: default_id_column(),
            display_name_column: display_name_column.to_string(),
            email_column: None,
        }
    }

    pub fn with_email_column(mut self, column: &str) -> Self {
        self.email_column = Some(column.to_string());
        self
    }

    /// Batch lookup statement, `$1` being a `UUID[]`
    pub(crate) fn load_batch_sql(&self) -> Result<String, SqlIdentifierError> {
        let id = quote_identifier(&self.id_column)?;
        let display_name = quote_identifier(&self.display_name_column)?;
        let email = match &self.email_column {
            Some(column) => format!("{}::text", quote_identifier(column)?),
            None => "NULL::text".to_string(),
        };
        Ok(format!(
            "SELECT {id} AS id, {display_name}::text AS display_name, {email} AS email FROM {} WHERE {id} = ANY($1)",
            quote_identifier(&self.table)?
        ))
    }
}
