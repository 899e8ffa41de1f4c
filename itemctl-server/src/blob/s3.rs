//! S3-compatible blob store backed by `object_store`

use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use super::{BlobError, BlobStore, ObjectKey};

/// S3 connection settings.
///
/// Credentials are not part of this struct: `AWS_ACCESS_KEY_ID`,
/// `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN` are read from the
/// environment by the builder.
#[derive(Debug, Clone, Default)]
pub struct S3Config {
    pub bucket: String,
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible services (MinIO, R2, ...)
    pub endpoint: Option<String>,
}

pub struct S3BlobStore {
    inner: AmazonS3,
    bucket: String,
}

impl S3BlobStore {
    /// Build the client. No network traffic happens until the first put.
    pub fn new(config: &S3Config) -> Result<Self, BlobError> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(&config.bucket);

        if let Some(region) = &config.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &config.endpoint {
            builder = builder
                .with_endpoint(endpoint)
                .with_allow_http(endpoint.starts_with("http://"));
        }

        let inner = builder.build()?;
        tracing::info!(
            bucket = %config.bucket,
            region = config.region.as_deref().unwrap_or("<default>"),
            "S3 blob store configured"
        );

        Ok(Self {
            inner,
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put(&self, key: &ObjectKey, body: Bytes, content_type: &str) -> Result<(), BlobError> {
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_owned().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let size = body.len();
        self.inner
            .put_opts(&Path::from(key.as_str()), PutPayload::from(body), opts)
            .await?;

        tracing::debug!(bucket = %self.bucket, key = %key, size, "Object stored");
        Ok(())
    }
}
