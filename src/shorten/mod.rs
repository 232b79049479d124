pub mod bitly;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The one message shown to the user for any failed submission.
/// The underlying cause goes to the log, never to the screen.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to shorten the URL. Please try again.";

/// Request body sent to the shortening service.
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub long_url: &'a str,
}

/// The only part of the service response we read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortLink {
    pub link: String,
}

#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),

    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),

    /// A 2xx response whose body is missing the short-link field.
    #[error("malformed service response")]
    MalformedResponse(#[source] reqwest::Error),
}

/// A service that turns a long URL into a short redirect link.
///
/// The production implementation is [`bitly::BitlyClient`]; tests substitute
/// their own implementations to exercise the submit flow without a network.
#[async_trait]
pub trait ShortenService: Send + Sync {
    async fn shorten(&self, long_url: &str) -> Result<ShortLink, ShortenError>;
}
