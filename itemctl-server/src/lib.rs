//! itemctl-server: item CRUD and blob uploads over HTTP
//!
//! - `db`: PostgreSQL pool, `items` table migration, item store
//! - `blob`: object storage for uploads (S3 or in-process)
//! - `http`: axum router, handlers, JSON errors
//! - `models`: validated request input

pub mod blob;
pub mod db;
pub mod http;
pub mod models;

pub use blob::{BlobStore, MemoryBlobStore, S3BlobStore, S3Config};
pub use db::{DatabaseConfig, ItemStore, PgItemStore};
pub use http::{run_server, AppState, ServerConfig};
