/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Request descriptors and small HTTP helpers shared by the session client

use crate::error::AppError;
use crate::utils::id::correlation_id;
use reqwest::Method;
use serde_json::Value;
use std::str::FromStr;

/// A single outbound request, built per call and discarded afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Endpoint path appended to the base URL (e.g. `/posts/1`)
    pub endpoint: String,
    /// HTTP method
    pub method: Method,
    /// Optional JSON body
    pub body: Option<Value>,
    /// Correlation id used only in logs and errors
    pub request_id: String,
}

impl RequestDescriptor {
    /// Creates a descriptor with a freshly generated correlation id
    pub fn new(endpoint: &str, method: Method, body: Option<Value>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            method,
            body,
            request_id: correlation_id(),
        }
    }

    /// Full URL of this request under `base_url`
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        build_url(base_url, &self.endpoint)
    }
}

/// Joins the base URL and the endpoint path with exactly one `/` between them
///
/// An empty endpoint yields the base URL unchanged.
#[must_use]
pub fn build_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if endpoint.is_empty() {
        return base.to_string();
    }
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Parses a textual HTTP method, case-insensitively
///
/// # Returns
/// * `Ok(Method)` - The parsed method, upper-cased for the standard verbs
/// * `Err(AppError::InvalidInput)` - If the string is empty or not a valid token
pub fn parse_method(method: &str) -> Result<Method, AppError> {
    let method = method.trim();
    if method.is_empty() {
        return Err(AppError::InvalidInput("HTTP method cannot be empty".to_string()));
    }
    Method::from_str(&method.to_uppercase())
        .map_err(|e| AppError::InvalidInput(format!("invalid HTTP method '{method}': {e}")))
}
