use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{ShortLink, ShortenError, ShortenRequest, ShortenService};

/// Bitly v4 shorten endpoint, overridable via config.
pub const BITLY_API_URL: &str = "https://api-ssl.bitly.com/v4/shorten";

/// Reqwest-backed adapter for the Bitly shortening API.
///
/// Owns transport details only: bearer authentication, JSON encoding, status
/// checking, and decoding the short-link field out of the response. No
/// explicit timeout is configured; the client library's defaults govern.
pub struct BitlyClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl BitlyClient {
    /// A missing or empty token is not rejected here; the request simply
    /// fails authorization at the service.
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl ShortenService for BitlyClient {
    async fn shorten(&self, long_url: &str) -> Result<ShortLink, ShortenError> {
        debug!(endpoint = %self.endpoint, "dispatching shorten request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&ShortenRequest { long_url })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "shorten request failed in transport");
                ShortenError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "shortening service rejected the request");
            return Err(ShortenError::Status(status));
        }

        response.json::<ShortLink>().await.map_err(|e| {
            warn!(error = %e, "shortening service returned an undecodable body");
            ShortenError::MalformedResponse(e)
        })
    }
}
