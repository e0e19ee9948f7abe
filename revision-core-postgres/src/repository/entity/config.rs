use revision_core_db::models::revision_metadata::RevisionMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::{quote_identifier, sql_type_name, SqlIdentifierError};

fn default_id_column() -> String {
    "id".to_string()
}

fn default_id_type() -> String {
    "uuid".to_string()
}

/// Describes an application table whose rows are revisionable.
///
/// - `id_type`: column type of `id_column`; looked up ids are cast to it so
///   the primary key index is used
/// - `relations`: relation accessor name -> registered type it points to
/// - `display_columns`: referencing field key -> column shown instead of
///   `display_column` when a row is displayed through that key
/// - `deleted_at_column`: soft delete marker; rows with a value are only
///   visible to `find_with_trashed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntityConfig {
    pub type_name: String,
    pub table: String,
    #[serde(default = "default_id_column")]
    pub id_column: String,
    #[serde(default = "default_id_type")]
    pub id_type: String,
    pub display_column: String,
    #[serde(default)]
    pub deleted_at_column: Option<String>,
    #[serde(default)]
    pub relations: HashMap<String, String>,
    #[serde(default)]
    pub display_columns: HashMap<String, String>,
    #[serde(default)]
    pub metadata: RevisionMetadata,
}

impl TableEntityConfig {
    pub fn new(type_name: &str, table: &str, display_column: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            table: table.to_string(),
            id_column: default_id_column(),
            id_type: default_id_type(),
            display_column: display_column.to_string(),
            deleted_at_column: None,
            relations: HashMap::new(),
            display_columns: HashMap::new(),
            metadata: RevisionMetadata::default(),
        }
    }

    pub fn with_id_column(mut self, column: &str, id_type: &str) -> Self {
        self.id_column = column.to_string();
        self.id_type = id_type.to_string();
        self
    }

    pub fn with_soft_deletes(mut self, column: &str) -> Self {
        self.deleted_at_column = Some(column.to_string());
        self
    }

    pub fn with_relation(mut self, accessor: &str, target_type: &str) -> Self {
        self.relations
            .insert(accessor.to_string(), target_type.to_string());
        self
    }

    pub fn with_display_column(mut self, key: &str, column: &str) -> Self {
        self.display_columns
            .insert(key.to_string(), column.to_string());
        self
    }

    pub fn with_metadata(mut self, metadata: RevisionMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Single row lookup returning the row as JSON text, `$1` being the id as text
    pub(crate) fn find_sql(&self, with_trashed: bool) -> Result<String, SqlIdentifierError> {
        let id = quote_identifier(&self.id_column)?;
        let id_type = sql_type_name(&self.id_type)?;
        let mut sql = format!(
            "SELECT row_to_json(t)::text FROM {} t WHERE t.{id} = $1::{id_type}",
            quote_identifier(&self.table)?
        );
        if let (false, Some(column)) = (with_trashed, &self.deleted_at_column) {
            sql.push_str(&format!(" AND t.{} IS NULL", quote_identifier(column)?));
        }
        sql.push_str(" LIMIT 1");
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: TableEntityConfig = serde_json::from_str(
            r#"{
                "type_name": "Post",
                "table": "posts",
                "display_column": "title",
                "relations": {"author": "User", "publishedStatus": "Status"},
                "metadata": {"formatted_field_names": {"author_id": "Author"}}
            }"#,
        )
        .unwrap();
        assert_eq!(config.id_column, "id");
        assert_eq!(config.id_type, "uuid");
        assert_eq!(config.relations["publishedStatus"], "Status");
        assert_eq!(config.metadata.formatted_field_names["author_id"], "Author");
        assert!(config.deleted_at_column.is_none());
    }

    #[test]
    fn test_find_sql() {
        let config = TableEntityConfig::new("Post", "posts", "title").with_soft_deletes("deleted_at");
        assert_eq!(
            config.find_sql(false).unwrap(),
            r#"SELECT row_to_json(t)::text FROM "posts" t WHERE t."id" = $1::uuid AND t."deleted_at" IS NULL LIMIT 1"#
        );
        assert_eq!(
            config.find_sql(true).unwrap(),
            r#"SELECT row_to_json(t)::text FROM "posts" t WHERE t."id" = $1::uuid LIMIT 1"#
        );
    }

    #[test]
    fn test_find_sql_without_soft_deletes() {
        let config = TableEntityConfig::new("Post", "posts", "title");
        assert_eq!(config.find_sql(false).unwrap(), config.find_sql(true).unwrap());
    }

    #[test]
    fn test_find_sql_compares_in_key_type() {
        let config = TableEntityConfig::new("Status", "statuses", "label").with_id_column("code", "bigint");
        let sql = config.find_sql(false).unwrap();
        assert!(sql.contains(r#"WHERE t."code" = $1::bigint"#));
        assert!(!sql.contains("::text ="));

        let unsafe_type = TableEntityConfig::new("Status", "statuses", "label").with_id_column("id", "uuid; --");
        assert!(unsafe_type.find_sql(false).is_err());
    }

    #[test]
    fn test_rejects_unsafe_table() {
        let config = TableEntityConfig::new("Post", "posts p, users", "title");
        assert!(config.find_sql(false).is_err());
    }
}
