use revision_core_db::models::actor::ActorModel;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

use super::config::ActorTableConfig;
use crate::utils::{get_heapless_string, get_optional_heapless_string, SqlIdentifierError, TryFromRow};

/// Loads actors from the application's user table.
///
/// Reads go straight to the pool: the user table belongs to the host
/// application and is never written inside a revision unit of work.
pub struct TableActorRepositoryImpl {
    pub(super) pool: Arc<PgPool>,
    pub(super) load_batch_sql: String,
}

impl TableActorRepositoryImpl {
    pub fn new(config: &ActorTableConfig, pool: Arc<PgPool>) -> Result<Self, SqlIdentifierError> {
        Ok(Self {
            pool,
            load_batch_sql: config.load_batch_sql()?,
        })
    }
}

impl TryFromRow<PgRow> for ActorModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ActorModel {
            id: row.try_get("id")?,
            display_name: get_heapless_string(row, "display_name")?,
            email: get_optional_heapless_string(row, "email")?,
        })
    }
}
