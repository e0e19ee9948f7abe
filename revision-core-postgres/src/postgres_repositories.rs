use postgres_unit_of_work::Executor;
use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::actor::{ActorTableConfig, TableActorRepositoryImpl};
use crate::repository::entity::{PgTableEntityType, TableEntityConfig};
use crate::repository::revision::revision_repository::RevisionRepositoryImpl;
use crate::repository::revision::RevisionRepositories;
use crate::utils::SqlIdentifierError;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Revision repositories sharing one new transaction.
    ///
    /// The transaction rolls back when the repositories are dropped unless
    /// it is committed through the executor first.
    pub async fn create_revision_repositories(&self) -> Result<RevisionRepositories, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);

        Ok(RevisionRepositories {
            revision_repository: Arc::new(RevisionRepositoryImpl::new(executor)),
        })
    }

    pub fn create_actor_repository(
        &self,
        config: &ActorTableConfig,
    ) -> Result<TableActorRepositoryImpl, SqlIdentifierError> {
        TableActorRepositoryImpl::new(config, self.pool.clone())
    }

    pub fn create_table_entity(
        &self,
        config: TableEntityConfig,
    ) -> Result<PgTableEntityType, SqlIdentifierError> {
        PgTableEntityType::new(config, self.pool.clone())
    }
}
