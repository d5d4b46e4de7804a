//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Code generation and mapping creation
//! - [`services::redirect_service::RedirectService`] - Code lookup for redirects

pub mod services;
