use async_trait::async_trait;
use revision_core_api::RevisionResult;
use revision_core_db::models::revision_metadata::RevisionMetadata;
use revision_core_db::revisionable::entity::{
    BoxError, RelationDescriptor, RevisionableRecord, RevisionableType,
};
use sqlx::PgPool;
use std::sync::Arc;

use super::config::TableEntityConfig;
use super::table_record::TableRecord;
use crate::utils::SqlIdentifierError;

/// A revisionable type backed by a plain table.
///
/// Lookups read committed rows through the pool so that history views do not
/// depend on an open unit of work.
pub struct PgTableEntityType {
    config: TableEntityConfig,
    pool: Arc<PgPool>,
    find_sql: String,
    find_with_trashed_sql: String,
}

impl PgTableEntityType {
    pub fn new(config: TableEntityConfig, pool: Arc<PgPool>) -> Result<Self, SqlIdentifierError> {
        Ok(Self {
            find_sql: config.find_sql(false)?,
            find_with_trashed_sql: config.find_sql(true)?,
            config,
            pool,
        })
    }

    pub fn config(&self) -> &TableEntityConfig {
        &self.config
    }

    async fn fetch(&self, sql: &str, id: &str) -> Result<Option<Box<dyn RevisionableRecord>>, BoxError> {
        let row: Option<String> = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        match row {
            Some(row) => {
                let record: Box<dyn RevisionableRecord> =
                    Box::new(TableRecord::from_json(&row, &self.config.display_column)?);
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl RevisionableType for PgTableEntityType {
    fn type_name(&self) -> &str {
        &self.config.type_name
    }

    fn revision_metadata(&self) -> RevisionMetadata {
        self.config.metadata.clone()
    }

    fn relation(&self, name: &str) -> RevisionResult<Option<RelationDescriptor>> {
        Ok(self
            .config
            .relations
            .get(name)
            .map(|target| RelationDescriptor::new(name, target)))
    }

    fn revision_display(
        &self,
        key: &str,
        record: &dyn RevisionableRecord,
    ) -> RevisionResult<Option<String>> {
        Ok(self
            .config
            .display_columns
            .get(key)
            .and_then(|column| record.attribute(column)))
    }

    async fn find(&self, id: &str) -> Result<Option<Box<dyn RevisionableRecord>>, BoxError> {
        self.fetch(&self.find_sql, id).await
    }

    async fn find_with_trashed(
        &self,
        id: &str,
    ) -> Result<Option<Box<dyn RevisionableRecord>>, BoxError> {
        self.fetch(&self.find_with_trashed_sql, id).await
    }
}
