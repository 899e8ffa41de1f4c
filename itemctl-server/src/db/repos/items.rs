//! Item repository
//!
//! Every method is a single parameterized statement. The duplicate-name
//! lookup and the insert are separate round trips; the unique constraint
//! on `items.name` is the real guard and surfaces as `DbError::UniqueViolation`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Item, ItemName, SearchPattern};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unique constraint violated for name '{name}'")]
    UniqueViolation { name: String },
}

impl DbError {
    /// Classify an insert failure, pulling unique violations out of the driver error.
    fn from_insert(e: sqlx::Error, name: &ItemName) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return Self::UniqueViolation {
                    name: name.as_str().to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}

/// Storage operations the item handlers need
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, ordered by id.
    async fn list(&self) -> Result<Vec<Item>, DbError>;

    /// Items whose name matches the pattern, case-insensitively.
    async fn search(&self, pattern: &SearchPattern) -> Result<Vec<Item>, DbError>;

    /// The item with exactly this name, if any.
    async fn find_by_name(&self, name: &ItemName) -> Result<Option<Item>, DbError>;

    /// Insert a new item and return it with its generated id.
    async fn insert(&self, name: &ItemName) -> Result<Item, DbError>;
}

/// PostgreSQL item store
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn search(&self, pattern: &SearchPattern) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name FROM items WHERE name ILIKE $1 ORDER BY id",
        )
        .bind(pattern.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn find_by_name(&self, name: &ItemName) -> Result<Option<Item>, DbError> {
        let item = sqlx::query_as::<_, Item>("SELECT id, name FROM items WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    async fn insert(&self, name: &ItemName) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>("INSERT INTO items (name) VALUES ($1) RETURNING id, name")
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DbError::from_insert(e, name))
    }
}
