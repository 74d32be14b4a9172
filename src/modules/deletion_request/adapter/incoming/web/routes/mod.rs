mod list_deletion_requests;
mod request_patient_deletion;
mod review_deletion_request;

pub use list_deletion_requests::*;
pub use request_patient_deletion::*;
pub use review_deletion_request::*;
