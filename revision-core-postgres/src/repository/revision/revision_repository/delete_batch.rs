use async_trait::async_trait;
use revision_core_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::RevisionRepositoryImpl;

impl RevisionRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &RevisionRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query("DELETE FROM revisions WHERE id = ANY($1)")
                .bind(ids)
                .execute(&mut **transaction)
                .await?
        };

        tracing::debug!(count = result.rows_affected(), "Deleted revisions");
        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for RevisionRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
