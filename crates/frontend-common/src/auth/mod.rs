//! Session context and lifecycle.

pub mod context;
pub mod error_handler;

pub use context::{
    use_is_authenticated, use_session, use_session_user, BootstrapMode, SessionAction,
    SessionContext, SessionData, SessionProvider,
};
