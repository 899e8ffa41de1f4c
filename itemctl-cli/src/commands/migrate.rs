//! One-shot schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::db::{create_pool, migrations};

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the items table if needed, then release the pool and return.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database.to_config())
        .await
        .context("Failed to create database pool")?;

    migrations::run_once(pool)
        .await
        .context("Migration failed")?;

    tracing::info!("Database is up to date");
    Ok(())
}
