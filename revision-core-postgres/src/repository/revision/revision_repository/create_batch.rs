use async_trait::async_trait;
use revision_core_db::models::revision::RevisionModel;
use revision_core_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::RevisionRepositoryImpl;

impl RevisionRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &RevisionRepositoryImpl,
        items: Vec<RevisionModel>,
    ) -> Result<Vec<RevisionModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            for item in &items {
                sqlx::query(
                    r#"
                    INSERT INTO revisions
                    (id, owner_type, owner_id, key, old_value, new_value, actor_id, action, created_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(item.id)
                .bind(item.owner_type.as_str())
                .bind(item.owner_id.as_str())
                .bind(item.key.as_str())
                .bind(item.old_value.as_deref())
                .bind(item.new_value.as_deref())
                .bind(item.actor_id)
                .bind(item.action)
                .bind(item.created_at)
                .execute(&mut **transaction)
                .await?;
            }
        } // Transaction lock released here

        tracing::debug!(count = items.len(), "Inserted revisions");
        Ok(items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, RevisionModel> for RevisionRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<RevisionModel>,
    ) -> Result<Vec<RevisionModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}
