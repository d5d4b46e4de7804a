//! Entity representing a short code to URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and the original URL.
///
/// Rows are written once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            created_at,
        }
    }
}

/// Input data for inserting a mapping. `created_at` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub code: String,
    pub original_url: String,
}

impl NewUrlMapping {
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }
}
