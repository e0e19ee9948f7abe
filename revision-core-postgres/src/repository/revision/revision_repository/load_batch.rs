use async_trait::async_trait;
use revision_core_db::models::revision::RevisionModel;
use revision_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::RevisionRepositoryImpl;
use crate::utils::TryFromRow;

impl RevisionRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &RevisionRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<RevisionModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT * FROM revisions WHERE id = ANY($1)"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            if let Some(transaction) = tx.as_mut() {
                sqlx::query(query).bind(ids).fetch_all(&mut **transaction).await?
            } else {
                return Err("Transaction has been consumed".into());
            }
        };

        let mut item_map = std::collections::HashMap::new();
        for row in rows {
            let item = RevisionModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| item_map.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, RevisionModel> for RevisionRepositoryImpl {
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<RevisionModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
