//! In-process item store for handler tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::items::{DbError, ItemStore};
use crate::models::{Item, ItemName, SearchPattern};

/// Item store backed by a Vec, with the same uniqueness rule as the table.
#[derive(Default)]
pub struct MemoryItemStore {
    items: Mutex<Vec<Item>>,
    unavailable: AtomicBool,
    /// Skip the pre-insert lookup result, simulating a lost check/insert race.
    hide_existing: AtomicBool,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the database were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_hide_existing(&self, hide: bool) {
        self.hide_existing.store(hide, Ordering::SeqCst);
    }

    pub fn count_named(&self, name: &str) -> usize {
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.name == name)
            .count()
    }

    pub fn count(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<(), DbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, DbError> {
        self.check_available()?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn search(&self, pattern: &SearchPattern) -> Result<Vec<Item>, DbError> {
        self.check_available()?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| pattern.matches(&i.name))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &ItemName) -> Result<Option<Item>, DbError> {
        self.check_available()?;
        if self.hide_existing.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.name == name.as_str())
            .cloned())
    }

    async fn insert(&self, name: &ItemName) -> Result<Item, DbError> {
        self.check_available()?;
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|i| i.name == name.as_str()) {
            return Err(DbError::UniqueViolation {
                name: name.as_str().to_owned(),
            });
        }
        let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let item = Item {
            id,
            name: name.as_str().to_owned(),
        };
        items.push(item.clone());
        Ok(item)
    }
}
