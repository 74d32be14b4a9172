pub mod deletion_requests;
