pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod session_revocation_memory;
pub mod session_revocation_redis;
pub mod user_query_sqlite;
pub mod user_repository_sqlite;

pub use session_revocation_memory::InMemorySessionRevocationRepository;
pub use session_revocation_redis::RedisSessionRevocationRepository;
pub use user_query_sqlite::UserQuerySqlite;
pub use user_repository_sqlite::UserRepositorySqlite;
