//! Database access: pool construction, startup migrations, repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::DbError;
