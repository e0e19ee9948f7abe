use async_trait::async_trait;
use revision_core_db::models::owner::OwnerReference;
use revision_core_db::models::revision::RevisionModel;
use revision_core_db::repository::find_by_owner::FindByOwner;
use revision_core_db::repository::pagination::{Page, PageRequest};
use sqlx::Postgres;
use std::error::Error;
use std::num::TryFromIntError;

use super::repo_impl::RevisionRepositoryImpl;
use crate::utils::TryFromRow;

impl RevisionRepositoryImpl {
    pub(super) async fn find_by_owner_impl(
        repo: &RevisionRepositoryImpl,
        owner: &OwnerReference,
        page: PageRequest,
    ) -> Result<Page<RevisionModel>, Box<dyn Error + Send + Sync>> {
        let (limit, offset) = page_bounds(page)?;

        let count_query = r#"SELECT COUNT(*) as count FROM revisions WHERE owner_type = $1 AND owner_id = $2"#;
        let total: i64 = {
            let mut tx = repo.executor.tx.lock().await;
            if let Some(transaction) = tx.as_mut() {
                sqlx::query_scalar(count_query)
                    .bind(owner.owner_type.as_str())
                    .bind(owner.owner_id.as_str())
                    .fetch_one(&mut **transaction)
                    .await?
            } else {
                return Err("Transaction has been consumed".into());
            }
        };

        // Newest first; id breaks ties between revisions written in one statement
        let query = r#"
            SELECT * FROM revisions
            WHERE owner_type = $1 AND owner_id = $2
            ORDER BY created_at DESC, id
            LIMIT $3 OFFSET $4
        "#;

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            if let Some(transaction) = tx.as_mut() {
                sqlx::query(query)
                    .bind(owner.owner_type.as_str())
                    .bind(owner.owner_id.as_str())
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&mut **transaction)
                    .await?
            } else {
                return Err("Transaction has been consumed".into());
            }
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(RevisionModel::try_from_row(&row)?);
        }

        Ok(Page::new(items, total as usize, page.limit, page.offset))
    }
}

/// `LIMIT` and `OFFSET` as SQL `BIGINT`s; pages beyond `i64::MAX` are rejected
fn page_bounds(page: PageRequest) -> Result<(i64, i64), TryFromIntError> {
    Ok((i64::try_from(page.limit)?, i64::try_from(page.offset)?))
}

#[async_trait]
impl FindByOwner<Postgres, RevisionModel> for RevisionRepositoryImpl {
    async fn find_by_owner(
        &self,
        owner: &OwnerReference,
        page: PageRequest,
    ) -> Result<Page<RevisionModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_owner_impl(self, owner, page).await
    }
}
