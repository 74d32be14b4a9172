use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::Actor;
use crate::modules::patient::application::domain::entities::{project, PatientView};
use crate::modules::patient::application::ports::incoming::use_cases::{
    ListPatientsError, ListPatientsUseCase,
};
use crate::modules::patient::application::ports::outgoing::{PatientListFilter, PatientQuery};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListPatientsService<Q>
where
    Q: PatientQuery,
{
    query: Q,
}

impl<Q> ListPatientsService<Q>
where
    Q: PatientQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPatientsUseCase for ListPatientsService<Q>
where
    Q: PatientQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        filter: PatientListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PatientView>, ListPatientsError> {
        let today = Utc::now().date_naive();
        let result = self.query.list(&filter, page).await?;

        Ok(result.map(|patient| project(patient, actor.role, today)))
    }
}
