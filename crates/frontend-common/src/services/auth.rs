//! Authentication API service

use nexabank_http::types::{AuthResponse, LoginRequest, RegisterRequest};

use crate::client::{portal_client, public_client};

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Authenticate with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client.login(request).await.map_err(|e| e.to_string())
    }

    /// Register a new user; a successful registration yields a session like
    /// login does
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client.register(request).await.map_err(|e| e.to_string())
    }

    /// Revoke the current session server-side. Callers proceed with the
    /// local logout even when this fails.
    pub async fn logout(&self) -> Result<(), String> {
        let client = portal_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client.logout().await.map(|_| ()).map_err(|e| e.to_string())
    }

    /// Revoke every session of the user ("logout everywhere").
    pub async fn logout_all(&self) -> Result<(), String> {
        let client = portal_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client.logout_all().await.map(|_| ()).map_err(|e| e.to_string())
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
