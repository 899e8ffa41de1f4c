//! Blob storage for uploaded objects
//!
//! Handlers only ever put: one call per request, no retries. The backend is
//! chosen at startup and shared behind `Arc<dyn BlobStore>`.

mod key;
mod memory;
mod s3;

use async_trait::async_trait;
use bytes::Bytes;

pub use key::ObjectKey;
pub use memory::{MemoryBlobStore, StoredObject};
pub use s3::{S3BlobStore, S3Config};

/// Blob store error type
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("blob store unavailable: {0}")]
    Unavailable(String),
}

/// Write-only view of an object store bucket
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Name of the bucket objects land in (for logging).
    fn bucket(&self) -> &str;

    /// Store `body` under `key` with the given content type.
    async fn put(&self, key: &ObjectKey, body: Bytes, content_type: &str) -> Result<(), BlobError>;
}
