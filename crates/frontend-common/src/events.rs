//! Same-origin and cross-tab refresh hints.
//!
//! Admin views that mutate users or accounts announce it twice: a DOM
//! `CustomEvent` for other components in the same page, and a best-effort
//! `BroadcastChannel` message for other tabs. Listeners react by refetching;
//! no data travels with the hint. Absence of `BroadcastChannel` support is
//! tolerated silently and changes nothing else.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BroadcastChannel, CustomEvent, MessageEvent};

use crate::config::AdminRefreshConfig;

/// In-page DOM event names.
pub mod dom {
    pub const USER_CREATED: &str = "userCreated";
    pub const USER_UPDATED: &str = "userUpdated";
    pub const USER_DELETED: &str = "userDeleted";
    pub const ACCOUNT_CREATED: &str = "accountCreated";
    pub const ACCOUNT_UPDATED: &str = "accountUpdated";
}

/// Cross-tab message types.
pub mod hint {
    pub const USER_CREATED: &str = "user:created";
    pub const USER_UPDATED: &str = "user:updated";
    pub const USER_DELETED: &str = "user:deleted";
    pub const ACCOUNT_CREATED: &str = "account:created";
    pub const ACCOUNT_UPDATED: &str = "account:updated";
    pub const STATS_REFRESH: &str = "stats:refresh";
}

/// Whether a broadcast message type should trigger a stats refetch.
pub fn is_refresh_hint(kind: &str) -> bool {
    kind.starts_with("user:") || kind.starts_with("account:") || kind == hint::STATS_REFRESH
}

/// Dispatch an in-page refresh hint on `window`.
pub fn dispatch_dom_hint(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(event) = CustomEvent::new(name) {
        let _ = window.dispatch_event(&event);
    }
}

/// Post a one-shot hint to the admin broadcast channel.
pub fn broadcast_hint(kind: &str) {
    let Ok(channel) = BroadcastChannel::new(AdminRefreshConfig::CHANNEL) else {
        // BroadcastChannel not supported; ignore silently
        return;
    };
    let message = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&message, &JsValue::from_str("type"), &JsValue::from_str(kind));
    let _ = channel.post_message(&message);
    channel.close();
}

/// Subscription to the admin broadcast channel. Dropping it closes the
/// channel and detaches the handler.
pub struct AdminChannel {
    channel: Option<BroadcastChannel>,
    _onmessage: Option<Closure<dyn FnMut(MessageEvent)>>,
}

impl AdminChannel {
    /// Open the channel and invoke `callback` with each message's `type`.
    pub fn subscribe(callback: impl Fn(String) + 'static) -> Self {
        let Ok(channel) = BroadcastChannel::new(AdminRefreshConfig::CHANNEL) else {
            return Self {
                channel: None,
                _onmessage: None,
            };
        };

        let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let data = event.data();
            if let Ok(kind) = js_sys::Reflect::get(&data, &JsValue::from_str("type")) {
                if let Some(kind) = kind.as_string() {
                    callback(kind);
                }
            }
        });
        channel.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        Self {
            channel: Some(channel),
            _onmessage: Some(onmessage),
        }
    }
}

impl Drop for AdminChannel {
    fn drop(&mut self) {
        if let Some(channel) = &self.channel {
            channel.set_onmessage(None);
            channel.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_hints_cover_user_account_and_stats() {
        assert!(is_refresh_hint(hint::USER_CREATED));
        assert!(is_refresh_hint(hint::ACCOUNT_UPDATED));
        assert!(is_refresh_hint(hint::STATS_REFRESH));
        assert!(is_refresh_hint("user:locked"));
        assert!(!is_refresh_hint("stats:reset"));
        assert!(!is_refresh_hint("session:expired"));
    }
}
