//! Substring search pattern for `ILIKE`

/// Escape character used in the generated pattern (PostgreSQL default for LIKE).
const ESCAPE: char = '\\';

/// An `ILIKE` pattern matching any name that contains the query text.
///
/// LIKE metacharacters in the query are escaped, so `50%` matches the
/// literal text "50%" rather than everything starting with "50".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern(String);

impl SearchPattern {
    /// Build a contains-pattern from raw query text. Empty text matches everything.
    pub fn contains(query: &str) -> Self {
        let mut pattern = String::with_capacity(query.len() + 2);
        pattern.push('%');
        for c in query.chars() {
            if matches!(c, '%' | '_' | ESCAPE) {
                pattern.push(ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        Self(pattern)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test with the same meaning as the SQL pattern.
    ///
    /// Used by stores that cannot run `ILIKE` themselves.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle().to_lowercase())
    }

    /// The unescaped query text between the wildcards.
    fn needle(&self) -> String {
        let inner = &self.0[1..self.0.len() - 1];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == ESCAPE {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}
