use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{authorize, Actor, Capability, UserId};
use crate::auth::application::ports::outgoing::UserRepository;
use crate::modules::audit::application::domain::entities::{AuditAction, NewAuditEntry};
use crate::modules::staff::application::domain::entities::SelfModification;
use crate::modules::staff::application::ports::incoming::use_cases::{
    DeleteStaffError, DeleteStaffUseCase,
};

pub struct DeleteStaffService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeleteStaffService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> DeleteStaffUseCase for DeleteStaffService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, actor: &Actor, id: UserId) -> Result<(), DeleteStaffError> {
        authorize(actor, Capability::ManageStaff)?;

        if actor.id == id {
            warn!(user_id = %actor.id, "Refused self-deletion");
            return Err(DeleteStaffError::CannotModifySelf(SelfModification::Delete));
        }

        self.user_repository
            .delete(
                id,
                NewAuditEntry::by(actor, AuditAction::DeleteStaff, format!("Deleted staff ID {id}")),
            )
            .await?;

        info!(staff_id = %id, user_id = %actor.id, "Staff account deleted");
        Ok(())
    }
}
