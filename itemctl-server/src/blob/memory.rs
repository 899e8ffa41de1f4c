//! Process-local blob store
//!
//! Keeps objects in memory for local development without cloud credentials.
//! Also records recent puts, which is what the upload handler tests assert on.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;

use super::{BlobError, BlobStore, ObjectKey};

/// Number of put keys kept in the log; older entries are dropped.
pub const PUT_LOG_LIMIT: usize = 256;

/// An object held by [`MemoryBlobStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: String,
}

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    bucket: String,
    objects: RwLock<HashMap<String, StoredObject>>,
    put_calls: RwLock<VecDeque<String>>,
    failing: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    /// Make subsequent puts fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects
            .read()
            .ok()
            .and_then(|objects| objects.get(key).cloned())
    }

    /// Keys of the last [`PUT_LOG_LIMIT`] attempted puts, in call order,
    /// including failed ones.
    pub fn put_calls(&self) -> Vec<String> {
        self.put_calls
            .read()
            .map(|calls| calls.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put(&self, key: &ObjectKey, body: Bytes, content_type: &str) -> Result<(), BlobError> {
        {
            let mut calls = self
                .put_calls
                .write()
                .map_err(|_| BlobError::Unavailable("put log poisoned".into()))?;
            if calls.len() == PUT_LOG_LIMIT {
                calls.pop_front();
            }
            calls.push_back(key.as_str().to_owned());
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(BlobError::Unavailable(format!(
                "bucket '{}' rejected put",
                self.bucket
            )));
        }

        self.objects
            .write()
            .map_err(|_| BlobError::Unavailable("object map poisoned".into()))?
            .insert(
                key.as_str().to_owned(),
                StoredObject {
                    body,
                    content_type: content_type.to_owned(),
                },
            );
        Ok(())
    }
}
