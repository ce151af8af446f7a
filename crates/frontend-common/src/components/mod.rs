//! Shared UI components

pub mod guard;
pub mod spinner;

pub use guard::{dashboard_for, Dashboard, RequireRole};
pub use spinner::LoadingSpinner;
