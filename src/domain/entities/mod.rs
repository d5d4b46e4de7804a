//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`], plus its insert-side
//! counterpart [`NewUrlMapping`].

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
