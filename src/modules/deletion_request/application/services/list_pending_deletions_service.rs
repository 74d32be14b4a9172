use async_trait::async_trait;

use crate::auth::application::domain::entities::{authorize, Actor, Capability};
use crate::modules::deletion_request::application::domain::entities::DeletionRequest;
use crate::modules::deletion_request::application::ports::incoming::use_cases::{
    ListPendingDeletionsError, ListPendingDeletionsUseCase,
};
use crate::modules::deletion_request::application::ports::outgoing::DeletionRequestQuery;
use crate::shared::validation::normalize_optional;

pub struct ListPendingDeletionsService<Q>
where
    Q: DeletionRequestQuery,
{
    query: Q,
}

impl<Q> ListPendingDeletionsService<Q>
where
    Q: DeletionRequestQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPendingDeletionsUseCase for ListPendingDeletionsService<Q>
where
    Q: DeletionRequestQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        search: Option<String>,
    ) -> Result<Vec<DeletionRequest>, ListPendingDeletionsError> {
        authorize(actor, Capability::ReviewDeletionRequests)?;

        Ok(self
            .query
            .list_pending(normalize_optional(search), None)
            .await?)
    }
}
