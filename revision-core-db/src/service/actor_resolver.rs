use async_trait::async_trait;
use revision_core_api::{RevisionError, RevisionResult};
use sqlx::Database;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::actor::ActorModel;
use crate::repository::load_batch::LoadBatch;
use crate::revisionable::entity::BoxError;

/// One way of turning an actor id into the responsible principal
#[async_trait]
pub trait ActorLookup: Send + Sync {
    async fn find_actor(&self, id: Uuid) -> Result<Option<ActorModel>, BoxError>;
}

/// Actor lookup backed by any repository able to batch-load [`ActorModel`]s,
/// i.e. the configured user model
pub struct ModelActorLookup<DB: Database, R: LoadBatch<DB, ActorModel>> {
    repository: Arc<R>,
    _db: PhantomData<fn() -> DB>,
}

impl<DB: Database, R: LoadBatch<DB, ActorModel>> ModelActorLookup<DB, R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _db: PhantomData,
        }
    }
}

#[async_trait]
impl<DB: Database, R: LoadBatch<DB, ActorModel>> ActorLookup for ModelActorLookup<DB, R> {
    async fn find_actor(&self, id: Uuid) -> Result<Option<ActorModel>, BoxError> {
        let results = self.repository.load_batch(&[id]).await?;
        Ok(results.into_iter().next().flatten())
    }
}

/// Resolves the actor of a revision.
///
/// When an identity provider is installed it is authoritative; otherwise the
/// configured model lookup is used.
pub struct ActorResolver {
    identity_provider: Option<Arc<dyn ActorLookup>>,
    model_lookup: Arc<dyn ActorLookup>,
}

impl ActorResolver {
    pub fn new(model_lookup: Arc<dyn ActorLookup>) -> Self {
        Self {
            identity_provider: None,
            model_lookup,
        }
    }

    pub fn with_identity_provider(mut self, identity_provider: Arc<dyn ActorLookup>) -> Self {
        self.identity_provider = Some(identity_provider);
        self
    }

    pub async fn resolve(&self, actor_id: Option<Uuid>) -> RevisionResult<Option<ActorModel>> {
        let Some(actor_id) = actor_id else {
            return Ok(None);
        };
        let lookup = self
            .identity_provider
            .as_ref()
            .unwrap_or(&self.model_lookup);
        lookup
            .find_actor(actor_id)
            .await
            .map_err(|e| RevisionError::Lookup(e.to_string()))
    }
}
