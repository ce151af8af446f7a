//! Typed REST clients for the NexaBank external services.
//!
//! The front-end applications talk to two services that are not part of this
//! repository: the auth service (`/api/auth/*`) and the app/admin service
//! (`/api/accounts/*`, `/api/admin/*`). Both speak the same JSON envelope.
//! This crate holds the wire types and the client pair: a public client for
//! the endpoints that issue tokens, and a portal client that attaches bearer
//! credentials and transparently recovers from one expired-access-token
//! failure per request.

pub mod client;
pub mod types;

pub use client::{
    error::ClientError,
    portal::{PortalClient, PortalClientBuilder},
    public::PublicAuthClient,
    store::{MemoryTokenStore, TokenStore},
};
