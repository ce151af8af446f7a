//! Token storage abstraction.
//!
//! The portal client reads credentials at send time and rotates them after a
//! refresh, but where they live differs per caller: the browser apps keep
//! them in `localStorage`, tests keep them in memory. The store is the one
//! shared resource between concurrent requests; last write wins.

use std::sync::Mutex;

/// Storage for the access/refresh token pair.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Replace both tokens atomically (a refresh rotates the pair).
    fn store(&self, access_token: &str, refresh_token: &str);
    fn clear(&self);
}

/// In-memory store used by tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<(String, String)>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        let store = Self::new();
        store.store(access_token, refresh_token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .as_ref()
            .map(|(access, _)| access.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .as_ref()
            .map(|(_, refresh)| refresh.clone())
    }

    fn store(&self, access_token: &str, refresh_token: &str) {
        *self.tokens.lock().expect("token store lock poisoned") =
            Some((access_token.to_string(), refresh_token.to_string()));
    }

    fn clear(&self) {
        *self.tokens.lock().expect("token store lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_replaces_both_tokens() {
        let store = MemoryTokenStore::with_tokens("a1", "r1");
        store.store("a2", "r2");
        assert_eq!(store.access_token().as_deref(), Some("a2"));
        assert_eq!(store.refresh_token().as_deref(), Some("r2"));

        store.clear();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
