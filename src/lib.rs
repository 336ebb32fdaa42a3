//! # api-session-client
//!
//! A minimal authenticated REST client built around an explicit session lifecycle:
//! connect, authenticate, issue requests, release.
//!
//! ## Lifecycle
//!
//! 1. [`SessionClient::new`](application::client::SessionClient::new) stores the
//!    configuration; no network I/O happens yet.
//! 2. `login()` lazily builds the transport, probes the service and, on `200 OK`,
//!    stores a fresh random session credential.
//! 3. `execute()` sends requests carrying `Authorization: Bearer <credential>` and
//!    returns the decoded JSON body. Without a credential it fails with
//!    [`AppError::Unauthenticated`](error::AppError::Unauthenticated) before touching
//!    the network.
//! 4. `close()` releases the transport and forgets the credential. It never fails
//!    and may be called any number of times.
//!
//! Every failure is returned as an [`AppError`](error::AppError) variant; nothing is
//! retried.
//!
//! ## Example
//!
//! ```ignore
//! use api_session_client::prelude::*;
//! use serde_json::json;
//!
//! let mut client = SessionClient::new(Config::new());
//! client.login().await?;
//!
//! let post = client.execute("/posts/1", Method::GET, None).await?;
//! assert_eq!(post["id"], 1);
//!
//! let created = client
//!     .execute("/posts", Method::POST, Some(json!({"title": "Test Post"})))
//!     .await?;
//! assert!(created.get("id").is_some());
//!
//! client.close();
//! ```
//!
//! ## Logging
//!
//! The client emits `tracing` events for every request and response, prefixed with
//! a short correlation id. Call [`setup_logger`](utils::logger::setup_logger) to
//! install a subscriber whose level is read from the `LOGLEVEL` environment variable.

/// Session client, transport, configuration and interfaces
pub mod application;

/// Crate-wide constants
pub mod constants;

/// Error types
pub mod error;

/// Request and session models
pub mod model;

/// Commonly used types, re-exported
pub mod prelude;

/// Identifier, logging and environment helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
