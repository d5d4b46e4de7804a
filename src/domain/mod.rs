//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Implementations of the repository traits live in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
