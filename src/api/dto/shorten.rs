//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// Only presence is checked; any non-empty string is accepted as a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        required(message = "Missing URL in request body"),
        length(min = 1, message = "Missing URL in request body")
    )]
    pub url: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
}
