/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types for the session client
//!
//! Every failure of the client surfaces as an [`AppError`]. Callers are expected to
//! match on the variant instead of inspecting the message.

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Main error type returned by every fallible operation of the crate
#[derive(Debug)]
pub enum AppError {
    /// `execute` was called while no session credential is held
    Unauthenticated,
    /// The login probe request did not complete with `200 OK`
    HandshakeFailure {
        /// Status returned by the probe, `None` when no response was received
        status: Option<StatusCode>,
        /// Response body or a short description of the failure
        reason: String,
        /// Underlying transport error, if any
        source: Option<reqwest::Error>,
    },
    /// The server answered a request with a status code >= 400
    RequestFailure {
        /// Status code of the response
        status: StatusCode,
        /// Raw response body, exactly as received
        body: String,
        /// Correlation id of the failed request
        request_id: String,
    },
    /// The connection could not be established, was interrupted or timed out
    Transport {
        /// Underlying reqwest error
        source: reqwest::Error,
        /// Correlation id of the request, when the error happened inside `execute`
        request_id: Option<String>,
    },
    /// A successful response body could not be decoded
    DecodeFailure {
        /// Underlying parse error
        source: serde_json::Error,
        /// Raw response body that failed to decode
        body: String,
        /// Correlation id of the request
        request_id: String,
    },
    /// A request body could not be serialized
    SerializationError(String),
    /// The caller supplied an invalid argument
    InvalidInput(String),
}

impl AppError {
    /// Returns `true` when the error was caused by the configured timeout elapsing
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            AppError::Transport { source, .. } => source.is_timeout(),
            AppError::HandshakeFailure {
                source: Some(source),
                ..
            } => source.is_timeout(),
            _ => false,
        }
    }

    /// Returns the HTTP status attached to the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RequestFailure { status, .. } => Some(*status),
            AppError::HandshakeFailure { status, .. } => *status,
            AppError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Returns the correlation id of the request that failed, if any
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            AppError::RequestFailure { request_id, .. }
            | AppError::DecodeFailure { request_id, .. } => Some(request_id),
            AppError::Transport { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Attaches a correlation id to a transport error that does not carry one yet
    pub(crate) fn with_request_id(self, id: &str) -> Self {
        match self {
            AppError::Transport {
                source,
                request_id: None,
            } => AppError::Transport {
                source,
                request_id: Some(id.to_string()),
            },
            other => other,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated => write!(f, "not logged in, call login() first"),
            AppError::HandshakeFailure {
                status: Some(status),
                reason,
                ..
            } => write!(f, "login failed with status {status}: {reason}"),
            AppError::HandshakeFailure {
                status: None,
                reason,
                ..
            } => write!(f, "login failed: {reason}"),
            AppError::RequestFailure {
                status,
                body,
                request_id,
            } => write!(f, "[{request_id}] request failed with status {status}: {body}"),
            AppError::Transport {
                source,
                request_id: Some(id),
            } => write!(f, "[{id}] transport error: {source}"),
            AppError::Transport {
                source,
                request_id: None,
            } => write!(f, "transport error: {source}"),
            AppError::DecodeFailure {
                source, request_id, ..
            } => write!(f, "[{request_id}] decode error: {source}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::HandshakeFailure {
                source: Some(source),
                ..
            } => Some(source),
            AppError::Transport { source, .. } => Some(source),
            AppError::DecodeFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport {
            source: err,
            request_id: None,
        }
    }
}
