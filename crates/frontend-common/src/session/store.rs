//! Browser-local token storage.
//!
//! The two keys are the only client-side persistence the product has. They
//! are read and written from the active tab, polling timers and broadcast
//! listeners alike; last write wins.

use nexabank_http::TokenStore;
use web_sys::Storage;

use crate::config::AppConfig;

/// Get localStorage
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// [`TokenStore`] over `localStorage`, shared by every client in the
/// application instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl TokenStore for BrowserTokenStore {
    fn access_token(&self) -> Option<String> {
        local_storage()?.get_item(AppConfig::ACCESS_TOKEN_KEY).ok()?
    }

    fn refresh_token(&self) -> Option<String> {
        local_storage()?.get_item(AppConfig::REFRESH_TOKEN_KEY).ok()?
    }

    fn store(&self, access_token: &str, refresh_token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(AppConfig::ACCESS_TOKEN_KEY, access_token);
            let _ = storage.set_item(AppConfig::REFRESH_TOKEN_KEY, refresh_token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AppConfig::ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(AppConfig::REFRESH_TOKEN_KEY);
        }
    }
}

/// Persist a token pair to browser storage.
pub fn persist_tokens(access_token: &str, refresh_token: &str) {
    BrowserTokenStore.store(access_token, refresh_token);
}

/// Remove both tokens from browser storage.
pub fn clear_tokens() {
    BrowserTokenStore.clear();
}

/// The access token currently in browser storage, if any.
pub fn stored_access_token() -> Option<String> {
    BrowserTokenStore.access_token()
}

/// The refresh token currently in browser storage, if any.
pub fn stored_refresh_token() -> Option<String> {
    BrowserTokenStore.refresh_token()
}
