//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService};
use crate::domain::repositories::UrlMappingRepository;
use crate::utils::code_generator::{AlphanumericCodeGenerator, CodeGenerator};

/// Services shared by all request handlers.
///
/// Holds no mutable state; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    /// Wires both services to one repository using the default code generator.
    pub fn new(repository: Arc<dyn UrlMappingRepository>, base_url: impl Into<String>) -> Self {
        Self::with_generator(
            repository,
            Arc::new(AlphanumericCodeGenerator::new()),
            base_url,
        )
    }

    /// Same as [`AppState::new`] with an explicit code generator.
    pub fn with_generator(
        repository: Arc<dyn UrlMappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(
                repository.clone(),
                generator,
                base_url,
            )),
            redirect_service: Arc::new(RedirectService::new(repository)),
        }
    }
}
