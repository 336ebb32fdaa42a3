use crate::utils::id::session_credential;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque credential stored after a successful login
///
/// The token is generated locally and is never validated by the remote side. It is
/// attached to every request as `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    token: String,
    issued_at: DateTime<Utc>,
}

impl SessionToken {
    /// Generates a fresh random token stamped with the current time
    #[must_use]
    pub fn generate() -> Self {
        Self {
            token: session_credential(),
            issued_at: Utc::now(),
        }
    }

    /// The raw credential value
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// When the token was issued
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Lifecycle state of a session client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Never logged in, or the last login attempt failed
    Fresh,
    /// Logged in, requests may be executed
    Ready,
    /// Closed; a new login makes the client usable again
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Fresh => write!(f, "fresh"),
            SessionState::Ready => write!(f, "ready"),
            SessionState::Closed => write!(f, "closed"),
        }
    }
}
