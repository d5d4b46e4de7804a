//! Short link creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Maximum number of candidate codes tried before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// Outcome of a successful shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub code: String,
    pub short_url: String,
}

/// Generates codes and writes new mappings.
///
/// Each attempt draws a candidate and hands it to
/// [`UrlMappingRepository::insert_if_absent`]. A rejected insert is a
/// collision and the next candidate is tried; after [`MAX_ATTEMPTS`]
/// collisions the request fails and nothing has been written.
pub struct ShortenService {
    repository: Arc<dyn UrlMappingRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl ShortenService {
    /// Creates a new shorten service.
    ///
    /// `base_url` is used verbatim as the prefix of every returned short URL.
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            generator,
            base_url: base_url.into(),
        }
    }

    /// Creates a mapping for `original_url` under a freshly generated code.
    ///
    /// Only presence is validated: any non-empty string is accepted.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `original_url` is empty (no store access happens)
    /// - [`AppError::ExhaustedRetries`] if every attempt collided
    /// - [`AppError::Store`] if the store fails; store failures are not retried
    pub async fn shorten(&self, original_url: &str) -> Result<ShortenedUrl, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request(
                "Missing URL in request body",
                json!({ "field": "url" }),
            ));
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let code = self.generator.generate();

            let inserted = self
                .repository
                .insert_if_absent(NewUrlMapping::new(code.as_str(), original_url))
                .await?;

            match inserted {
                Some(mapping) => {
                    info!(code = %mapping.code, attempt, "Created short link");
                    return Ok(ShortenedUrl {
                        short_url: self.short_url(&mapping.code),
                        code: mapping.code,
                    });
                }
                None => debug!(%code, attempt, "Code collision, retrying"),
            }
        }

        Err(AppError::ExhaustedRetries {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}
