//! Custom hooks for the applications

pub mod use_idle_logout;

pub use use_idle_logout::use_idle_logout;
