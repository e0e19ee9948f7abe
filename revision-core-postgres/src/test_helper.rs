//! Transaction-scoped test contexts.
//!
//! Every context runs inside its own transaction which is rolled back when
//! the context is dropped, so tests need no cleanup of the revisions table.
//! Tests talking to a database are `#[ignore]`d; run them with
//! `cargo test -- --ignored` against `DATABASE_URL`.

use crate::config::DatabaseConfig;
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::revision::RevisionRepositories;
use std::sync::Arc;

pub struct TestContext {
    pub revision_repos: RevisionRepositories,
}

impl TestContext {
    pub fn revision_repos(&self) -> &RevisionRepositories {
        &self.revision_repos
    }
}

/// Opens a single connection, applies migrations and starts a transaction
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let pool = DatabaseConfig::from_env().with_max_connections(1).connect().await?;
    sqlx::migrate!().run(&pool).await?;

    let repos = PostgresRepositories::new(Arc::new(pool));
    let revision_repos = repos.create_revision_repositories().await?;

    Ok(TestContext { revision_repos })
}

/// Repositories on a shared pool, for tests that read data committed outside
/// a revision transaction
pub async fn setup_shared_repos() -> Result<PostgresRepositories, Box<dyn std::error::Error + Send + Sync>> {
    let pool = DatabaseConfig::from_env().connect().await?;
    sqlx::migrate!().run(&pool).await?;

    Ok(PostgresRepositories::new(Arc::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::revision::revision_repository::test_utils::create_test_revision;
    use revision_core_db::repository::create_batch::CreateBatch;
    use revision_core_db::repository::load_batch::LoadBatch;

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let revision = create_test_revision("Post", "1", "title");
        {
            let ctx = setup_test_context().await?;
            let revision_repo = &ctx.revision_repos().revision_repository;
            revision_repo.create_batch(vec![revision.clone()]).await?;

            let loaded = revision_repo.load_batch(&[revision.id]).await?;
            assert!(loaded[0].is_some());
        } // Rolled back here

        {
            let ctx = setup_test_context().await?;
            let revision_repo = &ctx.revision_repos().revision_repository;
            let loaded = revision_repo.load_batch(&[revision.id]).await?;
            assert!(loaded[0].is_none());
        }

        Ok(())
    }
}
