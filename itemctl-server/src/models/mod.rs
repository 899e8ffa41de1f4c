//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod search;
pub mod validation;

pub use item::{Item, ItemName};
pub use search::SearchPattern;
pub use validation::ValidationError;
