//! MediaVault Repository Client
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Thin async client for the external asset store's REST contract. One
//! method per endpoint, JSON in and out, no retries, no caching, no
//! business logic; retry/backoff policy, if any, belongs to callers.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::{AssetClient, ClientConfig};
pub use error::{RepositoryError, Result};
