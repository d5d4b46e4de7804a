//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUrlMappingRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryUrlMappingRepository`] - process-local storage for tests and development

pub mod memory_url_mapping_repository;
pub mod pg_url_mapping_repository;

pub use memory_url_mapping_repository::InMemoryUrlMappingRepository;
pub use pg_url_mapping_repository::PgUrlMappingRepository;
