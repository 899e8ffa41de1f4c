//! Schema migration for the items table

use sqlx::PgPool;

/// Idempotent DDL for the only table this service owns.
pub const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id SERIAL PRIMARY KEY,
        name TEXT UNIQUE NOT NULL
    )
"#;

/// Ensure the items table exists.
///
/// Runs on a single connection acquired from the pool; the connection is
/// returned when it drops, whatever the outcome.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running item migrations...");

    let mut conn = pool.acquire().await?;
    sqlx::query(CREATE_ITEMS_TABLE).execute(&mut *conn).await?;

    tracing::info!("Item migrations complete");
    Ok(())
}

/// Run migrations once and shut the pool down.
///
/// Failures are logged for the operator and returned; the pool is closed
/// either way so the process can exit.
pub async fn run_once(pool: PgPool) -> Result<(), sqlx::Error> {
    let result = run(&pool).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Migration failed");
    }
    pool.close().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_is_idempotent_and_constrained() {
        assert!(CREATE_ITEMS_TABLE.contains("IF NOT EXISTS items"));
        assert!(CREATE_ITEMS_TABLE.contains("id SERIAL PRIMARY KEY"));
        assert!(CREATE_ITEMS_TABLE.contains("name TEXT UNIQUE NOT NULL"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migration_runs_twice() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn run_once_closes_pool() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");
        let handle = pool.clone();

        run_once(pool).await.expect("migration failed");
        assert!(handle.is_closed());
    }
}
