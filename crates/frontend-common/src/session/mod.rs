//! Session artifacts: token storage, the cross-application hand-off, the
//! JWT payload fallback and the idle timer.

pub mod handoff;
pub mod idle;
pub mod jwt;
pub mod store;

pub use handoff::{HandoffPayload, LogoutMarker};
pub use idle::{IdleEvent, IdlePhase, IdleTimer};
pub use store::BrowserTokenStore;
