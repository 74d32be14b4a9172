use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::Actor;
use crate::modules::patient::application::domain::entities::{project, PatientId, PatientView};
use crate::modules::patient::application::ports::incoming::use_cases::{
    GetPatientError, GetPatientUseCase,
};
use crate::modules::patient::application::ports::outgoing::PatientQuery;

pub struct GetPatientService<Q>
where
    Q: PatientQuery,
{
    query: Q,
}

impl<Q> GetPatientService<Q>
where
    Q: PatientQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPatientUseCase for GetPatientService<Q>
where
    Q: PatientQuery + Send + Sync,
{
    async fn execute(&self, actor: &Actor, id: PatientId) -> Result<PatientView, GetPatientError> {
        let patient = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(GetPatientError::NotFound)?;

        Ok(project(patient, actor.role, Utc::now().date_naive()))
    }
}
