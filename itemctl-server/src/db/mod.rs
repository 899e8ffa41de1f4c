//! Database layer - connection pool, schema migration, item store
//!
//! - One shared PgPool; each query acquires and releases its own connection
//! - Uniqueness is enforced by the `items.name` constraint
//! - No transactions: every operation is a single statement

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_options, DatabaseConfig};
pub use repos::{DbError, ItemStore, PgItemStore};
