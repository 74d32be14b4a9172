mod list_pending_deletions;
mod request_deletion;
mod review_deletion;

pub use list_pending_deletions::{ListPendingDeletionsError, ListPendingDeletionsUseCase};
pub use request_deletion::{RequestDeletionError, RequestDeletionUseCase};
pub use review_deletion::{ApproveDeletionUseCase, DenyDeletionUseCase, ReviewDeletionError};
