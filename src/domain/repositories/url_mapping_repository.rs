//! Repository trait for short code mappings.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{NewUrlMapping, UrlMapping};

/// Failures reported by a store implementation.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("store returned invalid data: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Short identifier used in error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "unavailable",
            Self::Timeout(_) => "timeout",
            Self::Query(_) => "query",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

/// Repository interface for the `url_map` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryUrlMappingRepository`] - DashMap, used by the test suites
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Inserts the mapping only if its code is not taken yet.
    ///
    /// The existence check and the insert are a single atomic operation.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` with the stored row if inserted
    /// - `Ok(None)` if the code already exists (nothing is written)
    async fn insert_if_absent(
        &self,
        new_mapping: NewUrlMapping,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Finds a mapping by exact code match.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
