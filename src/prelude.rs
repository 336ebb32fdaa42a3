/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the types needed for most uses of the client into scope with a single import.
//!
//! ```rust
//! use api_session_client::prelude::*;
//!
//! let client = SessionClient::new(Config::new());
//! assert_eq!(client.state(), SessionState::Fresh);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the session client
pub use crate::application::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION CLIENT
// ============================================================================

/// Session client and its interface
pub use crate::application::client::SessionClient;
pub use crate::application::interfaces::session::SessionApi;

/// Lazily created transport
pub use crate::application::transport::TransportHandle;

// ============================================================================
// MODELS
// ============================================================================

/// Request descriptor and HTTP helpers
pub use crate::model::http::{RequestDescriptor, build_url, parse_method};

/// Session credential and state
pub use crate::model::session::{SessionState, SessionToken};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Identifier utilities
pub use crate::utils::id::correlation_id;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
