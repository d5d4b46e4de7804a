//! Short code lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;

/// Resolves short codes to their stored mapping.
pub struct RedirectService {
    repository: Arc<dyn UrlMappingRepository>,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn UrlMappingRepository>) -> Self {
        Self { repository }
    }

    /// Looks up `code` by exact match.
    ///
    /// The code is used as given: no trimming, decoding or case folding.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `code` is empty
    /// - [`AppError::NotFound`] if no mapping exists
    /// - [`AppError::Store`] on store failures
    pub async fn resolve(&self, code: &str) -> Result<UrlMapping, AppError> {
        if code.is_empty() {
            return Err(AppError::bad_request("Missing code", json!({ "field": "code" })));
        }

        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Checks that the underlying store is reachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await.map_err(AppError::from)
    }
}
