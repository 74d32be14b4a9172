pub mod deletion_request_query;
pub mod deletion_request_repository;

pub use deletion_request_query::{DeletionRequestQuery, DeletionRequestQueryError};
pub use deletion_request_repository::{
    DeletionRequestRepository, DeletionRequestRepositoryError, NewDeletionRequest,
};
