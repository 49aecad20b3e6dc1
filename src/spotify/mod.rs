//! # Spotify Integration Module
//!
//! This module is the HTTP layer between sposearch and the Spotify Web API.
//! It covers the two remote operations the application performs:
//!
//! - [`auth`] - OAuth 2.0 client-credentials token exchange. The
//!   application authenticates as itself (no end user involved) and trades
//!   its client id/secret for a short-lived bearer token.
//! - [`search`] - the catalog search endpoint (`GET /search`), issued with
//!   bearer authorization and decoded into [`crate::types::SearchResults`].
//!
//! ## Design
//!
//! Each endpoint is a free async function built on `reqwest`, taking its
//! endpoint URL from [`crate::config`] so tests can point the client at a
//! local stub server. Calls either fully succeed or fail with one of the
//! typed [`crate::error::Error`] kinds; there is deliberately no retry,
//! backoff, or partial result anywhere in this layer; failures surface to
//! the interactive loop as a one-line message and the application keeps
//! running.
//!
//! Token lifecycle (caching, expiry, refresh-on-demand) lives one layer up
//! in [`crate::management::TokenManager`]; this module only performs the
//! wire exchanges.

pub mod auth;
pub mod search;
