pub mod deletion_request_query_sqlite;
pub mod deletion_request_repository_sqlite;
pub mod sea_orm_entity;

pub use deletion_request_query_sqlite::DeletionRequestQuerySqlite;
pub use deletion_request_repository_sqlite::DeletionRequestRepositorySqlite;
