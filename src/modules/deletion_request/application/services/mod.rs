mod list_pending_deletions_service;
mod request_deletion_service;
mod review_deletion_service;

pub use list_pending_deletions_service::ListPendingDeletionsService;
pub use request_deletion_service::RequestDeletionService;
pub use review_deletion_service::{ApproveDeletionService, DenyDeletionService};
