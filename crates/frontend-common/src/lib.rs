//! Shared session layer for the NexaBank front-end applications.
//!
//! Each application instance owns exactly one session, hydrated once at
//! bootstrap through a single authoritative path: a cross-application
//! hand-off carried in the URL, then browser storage validated against the
//! auth service, with an unverified JWT payload decode as the last-resort
//! offline fallback. The layers are never merged.

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod events;
pub mod hooks;
pub mod services;
pub mod session;

pub use auth::context::SessionContext;
pub use client::{portal_client, public_client};
pub use components::{LoadingSpinner, RequireRole};
pub use config::{AppConfig, IdleConfig};
