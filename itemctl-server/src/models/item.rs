//! Item record and validated item name

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A stored item, as returned by every item endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
}

/// Validated item name.
///
/// The only rule is presence: the name must not be missing or empty.
/// Uniqueness is checked against the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// # Example
    /// ```
    /// use itemctl_server::models::ItemName;
    ///
    /// assert!(ItemName::new("Widget").is_ok());
    /// assert!(ItemName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_name() {
        assert!(ItemName::new("Widget").is_ok());
        assert!(ItemName::new("with spaces").is_ok());
        assert!(ItemName::new(" ").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = ItemName::new("").unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "name" });
    }

    #[test]
    fn keeps_case() {
        let name = ItemName::new("WiDgEt").unwrap();
        assert_eq!(name.as_str(), "WiDgEt");
    }

    #[test]
    fn item_serializes_as_id_and_name() {
        let item = Item {
            id: 1,
            name: "Widget".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Widget"}));
    }
}
