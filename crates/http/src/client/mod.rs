//! Client pair for the two NexaBank services.
//!
//! [`public::PublicAuthClient`] covers the endpoints that issue tokens and
//! therefore must never require one. [`portal::PortalClient`] covers
//! everything behind authentication, spanning both service base URLs, and
//! owns the 401 → refresh → single replay policy.

pub mod error;
pub mod portal;
pub mod public;
pub mod store;

pub use error::ClientError;
pub use portal::{PortalClient, PortalClientBuilder};
pub use public::PublicAuthClient;
pub use store::{MemoryTokenStore, TokenStore};

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};

pub(crate) const USER_AGENT: &str = "nexabank-web/0.1.0";

/// Headers preventing caches from serving stale data in dev and multi-tab
/// scenarios.
pub(crate) fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    headers
}

/// Decode a response into the envelope payload, mapping error statuses onto
/// [`ClientError`] and `success=false` envelopes onto [`ClientError::Api`].
pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        let envelope: crate::types::ApiEnvelope<T> = response.json().await?;
        envelope.into_data()
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}
