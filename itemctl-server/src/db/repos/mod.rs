//! Repository implementations for database access

pub mod items;
#[cfg(test)]
pub mod memory;

pub use items::{DbError, ItemStore, PgItemStore};
