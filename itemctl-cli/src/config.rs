//! Environment-backed configuration shared by the subcommands
//!
//! Every option can come from a flag or an environment variable; `.env`
//! in the working directory is loaded before parsing.

use clap::{Args, ValueEnum};

use itemctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use itemctl_server::{DatabaseConfig, S3Config};

/// PostgreSQL connection options
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL; without it the PGHOST/PGUSER/PGPASSWORD/PGDATABASE variables are used
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn to_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            max_connections: self.max_connections,
        }
    }
}

/// Where uploaded objects go
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobBackend {
    /// S3-compatible object storage
    S3,
    /// Process memory (local development; lost on exit)
    Memory,
}

/// Blob store options
#[derive(Args, Debug, Clone)]
pub struct BlobArgs {
    /// Upload backend
    #[arg(long, env = "BLOB_BACKEND", value_enum, default_value = "s3")]
    pub blob_backend: BlobBackend,

    /// Target bucket; uploads answer 500 when unset
    #[arg(long, env = "S3_BUCKET_NAME")]
    pub bucket: Option<String>,

    /// Bucket region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible services (MinIO, R2, ...)
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,
}

impl BlobArgs {
    /// S3 settings, or `None` when no bucket is configured.
    pub fn s3_config(&self) -> Option<S3Config> {
        self.bucket.as_ref().map(|bucket| S3Config {
            bucket: bucket.clone(),
            region: self.region.clone(),
            endpoint: self.s3_endpoint.clone(),
        })
    }
}
