//! PostgreSQL implementation of the url mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{StoreError, UrlMappingRepository};

/// PostgreSQL repository for the `url_map` table.
///
/// Each query checks a connection out of the pool and hands it back when the
/// query future completes or is dropped, including on error paths.
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UrlMapRow {
    code: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlMapRow> for UrlMapping {
    fn from(row: UrlMapRow) -> Self {
        UrlMapping::new(row.code, row.original_url, row.created_at)
    }
}

/// Maps driver errors onto the store taxonomy.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn insert_if_absent(
        &self,
        new_mapping: NewUrlMapping,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, UrlMapRow>(
            r#"
            INSERT INTO url_map (code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, original_url, created_at
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.original_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, UrlMapRow>(
            r#"
            SELECT code, original_url, created_at
            FROM url_map
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(UrlMapping::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_pool_timeout() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Timeout(_)));
    }

    #[test]
    fn test_map_pool_closed() {
        let err = map_sqlx_error(sqlx::Error::PoolClosed);
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_map_row_not_found() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::InvalidData(_)));
    }

    #[test]
    fn test_map_other_error() {
        let err = map_sqlx_error(sqlx::Error::Protocol("unexpected".to_string()));
        assert!(matches!(err, StoreError::Query(_)));
    }
}
