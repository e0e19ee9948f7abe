use async_trait::async_trait;
use revision_core_db::models::actor::ActorModel;
use revision_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::TableActorRepositoryImpl;
use crate::utils::TryFromRow;

impl TableActorRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &TableActorRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ActorModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(&repo.load_batch_sql)
            .bind(ids)
            .fetch_all(repo.pool.as_ref())
            .await?;

        let mut item_map = HashMap::new();
        for row in rows {
            let item = ActorModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| item_map.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, ActorModel> for TableActorRepositoryImpl {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<ActorModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
