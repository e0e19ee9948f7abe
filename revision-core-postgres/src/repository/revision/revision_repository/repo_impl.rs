use async_trait::async_trait;
use postgres_unit_of_work::Executor;
use revision_core_db::models::revision::RevisionModel;
use revision_core_db::repository::{load::Load, load_batch::LoadBatch};
use sqlx::{postgres::PgRow, Postgres, Row};
use std::error::Error;
use uuid::Uuid;

use crate::utils::{get_heapless_string, TryFromRow};

pub struct RevisionRepositoryImpl {
    pub(crate) executor: Executor,
}

impl RevisionRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for RevisionModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(RevisionModel {
            id: row.try_get("id")?,
            owner_type: get_heapless_string(row, "owner_type")?,
            owner_id: get_heapless_string(row, "owner_id")?,
            key: get_heapless_string(row, "key")?,
            old_value: row.try_get("old_value")?,
            new_value: row.try_get("new_value")?,
            actor_id: row.try_get("actor_id")?,
            action: row.try_get("action")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl Load<Postgres, RevisionModel> for RevisionRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<RevisionModel, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        results
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| format!("Revision {id} not found").into())
    }
}
