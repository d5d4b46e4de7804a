//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`UrlMappingRepository`] - Short code storage and lookup
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod url_mapping_repository;

pub use url_mapping_repository::{StoreError, UrlMappingRepository};

#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
