//! HTTP server command
//!
//! Builds the pool and blob store, optionally migrates, then serves until
//! Ctrl+C/SIGTERM. The pool connects on first query unless `--migrate`
//! needs a connection up front, so `/health` answers while the database
//! is down.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::db::{create_lazy_pool, create_pool, migrations};
use itemctl_server::http::server::DEFAULT_MAX_UPLOAD_BYTES;
use itemctl_server::{
    run_server, AppState, BlobStore, MemoryBlobStore, PgItemStore, S3BlobStore, ServerConfig,
};

use crate::config::{BlobArgs, BlobBackend, DatabaseArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub blob: BlobArgs,

    /// Insert without the duplicate-name lookup; duplicates then fail on the unique constraint (500)
    #[arg(long)]
    pub skip_duplicate_check: bool,

    /// Largest accepted request body in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create the items table before serving
    #[arg(long)]
    pub migrate: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}

/// Build the configured blob store, if any.
fn blob_store(args: &BlobArgs) -> Result<Option<Arc<dyn BlobStore>>> {
    match args.blob_backend {
        BlobBackend::Memory => {
            let bucket = args.bucket.clone().unwrap_or_else(|| "memory".to_string());
            tracing::warn!(%bucket, "Using in-memory blob store; uploads are lost on exit");
            let store: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::new(bucket));
            Ok(Some(store))
        }
        BlobBackend::S3 => match args.s3_config() {
            Some(config) => {
                let store: Arc<dyn BlobStore> =
                    Arc::new(S3BlobStore::new(&config).context("Failed to configure S3 client")?);
                Ok(Some(store))
            }
            None => Ok(None),
        },
    }
}

/// Build the handler state: item store, blob store, insert mode.
async fn build_state(args: &ServeArgs) -> Result<AppState> {
    let blobs = blob_store(&args.blob)?;
    let database = args.database.to_config();

    let pool = if args.migrate {
        let pool = create_pool(&database)
            .await
            .context("Failed to create database pool")?;
        migrations::run(&pool)
            .await
            .context("Failed to migrate database")?;
        pool
    } else {
        create_lazy_pool(&database).context("Invalid database configuration")?
    };

    Ok(AppState::new(Arc::new(PgItemStore::new(pool)), blobs)
        .with_duplicate_check(!args.skip_duplicate_check))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    let state = build_state(&args).await?;

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
