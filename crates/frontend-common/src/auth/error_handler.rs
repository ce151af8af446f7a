//! Global session-expired handler
//!
//! The portal client clears the session when a refresh is impossible; what
//! happens next differs per application (the Customer surface navigates to
//! the Login origin, the Login surface just drops to the login form). Each
//! application registers its behavior here once at startup.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Global session-expired callback
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Set the global session-expired callback
pub fn set_session_expired_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the session-expired callback
pub fn clear_session_expired_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Trigger the session-expired callback
pub fn trigger_session_expired() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        if let Some(callback) = cb.borrow().as_ref() {
            callback();
        }
    });
}
