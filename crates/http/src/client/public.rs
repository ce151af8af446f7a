//! Unauthenticated client for the token-issuing auth endpoints.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use super::error::ClientError;
use crate::types::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest};

/// Client for the auth-service endpoints that must work without a session.
#[derive(Clone)]
pub struct PublicAuthClient {
    client: Client,
    base_url: String,
}

impl PublicAuthClient {
    /// Create a new public client against the auth service base URL
    /// (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new()
                .user_agent(super::USER_AGENT)
                .default_headers(super::no_cache_headers());
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout; // Timeouts not supported on WASM
            ClientBuilder::new()
                .user_agent(super::USER_AGENT)
                .default_headers(super::no_cache_headers())
                .build()?
        };

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&request)
            .send()
            .await?;
        super::decode(response).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(&request)
            .send()
            .await?;
        super::decode(response).await
    }

    /// `POST /auth/refresh` — exchange a refresh token for a rotated pair.
    pub async fn refresh(&self, refresh_token: String) -> Result<AuthResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/auth/refresh", self.base_url))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?;
        super::decode(response).await
    }
}
