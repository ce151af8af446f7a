//! Client configuration and initialization

pub use nexabank_http::ClientError;
use nexabank_http::{PortalClient, PublicAuthClient};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::session::BrowserTokenStore;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicAuthClient>>> = Lazy::new(|| Mutex::new(None));
static PORTAL_CLIENT: Lazy<Mutex<Option<PortalClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the public auth client (for the token-issuing endpoints)
pub fn public_client() -> Result<PublicAuthClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = PublicAuthClient::new(AppConfig::AUTH_API_BASE)?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the portal client. It reads credentials from browser storage at send
/// time, so the same instance serves the whole session lifecycle.
pub fn portal_client() -> Result<PortalClient, ClientError> {
    let mut client_lock = PORTAL_CLIENT
        .lock()
        .expect("Failed to acquire portal client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = PortalClient::builder()
        .auth_base_url(AppConfig::AUTH_API_BASE)
        .app_base_url(AppConfig::APP_API_BASE)
        .token_store(Arc::new(BrowserTokenStore::new()))
        .on_session_expired(|| crate::auth::error_handler::trigger_session_expired())
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
