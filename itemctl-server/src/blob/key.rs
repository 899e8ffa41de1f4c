//! Object key generation

use std::fmt;

use chrono::{DateTime, Utc};

/// Fallback when an upload carries no usable filename
const DEFAULT_FILENAME: &str = "upload";

/// Key an uploaded object is stored under.
///
/// Keys start with the upload time in unix milliseconds so that
/// repeated uploads of the same file do not overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// `<millis>.<extension>`, for generated payloads.
    pub fn timestamped(now: DateTime<Utc>, extension: &str) -> Self {
        Self(format!("{}.{}", now.timestamp_millis(), extension))
    }

    /// `<millis>-<filename>`, for client uploads.
    ///
    /// Only the last path component of the client filename is kept.
    pub fn for_upload(now: DateTime<Utc>, filename: Option<&str>) -> Self {
        let base = filename
            .and_then(|f| f.rsplit(['/', '\\']).next())
            .map(str::trim)
            .filter(|f| !f.is_empty() && *f != "." && *f != "..")
            .unwrap_or(DEFAULT_FILENAME);
        Self(format!("{}-{}", now.timestamp_millis(), base))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
