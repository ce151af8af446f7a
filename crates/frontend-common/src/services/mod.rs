//! API services

pub mod auth;

pub use auth::AuthApiService;
