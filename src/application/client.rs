/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Session client
//!
//! This module provides the client that owns the whole session lifecycle:
//! - Login handshake against a fixed probe path
//! - Bearer-authenticated requests through a single `execute` pipeline
//! - Release of the transport and credential on close
//!
//! # Example
//! ```ignore
//! use api_session_client::prelude::*;
//!
//! let mut client = SessionClient::new(Config::new());
//! client.login().await?;
//! let post = client.execute("/posts/1", Method::GET, None).await?;
//! client.close();
//! ```

use crate::application::config::Config;
use crate::application::interfaces::session::SessionApi;
use crate::application::transport::TransportHandle;
use crate::constants::LOGIN_PROBE_PATH;
use crate::error::AppError;
use crate::model::http::{RequestDescriptor, build_url};
use crate::model::session::{SessionState, SessionToken};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

const JSON_CONTENT: &str = "application/json";

/// REST client holding one transport and at most one session credential
///
/// The credential is present if and only if the last `login` succeeded and no
/// `close` happened since. A closed client can log in again.
pub struct SessionClient {
    config: Config,
    transport: TransportHandle,
    session: Option<SessionToken>,
    /// Set by `close`, cleared by `login`; tells `Closed` apart from `Fresh`
    closed: bool,
}

impl SessionClient {
    /// Creates a client without touching the network
    ///
    /// # Arguments
    /// * `config` - Base URL and timeout
    pub fn new(config: Config) -> Self {
        let transport = TransportHandle::new(config.timeout_duration());
        Self {
            config,
            transport,
            session: None,
            closed: false,
        }
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL every endpoint is appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Timeout applied to every network operation
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.config.timeout_duration()
    }

    /// The current session credential, if logged in
    #[must_use]
    pub fn session(&self) -> Option<&SessionToken> {
        self.session.as_ref()
    }

    /// Whether a session credential is held
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        match (&self.session, self.closed) {
            (Some(_), _) => SessionState::Ready,
            (None, true) => SessionState::Closed,
            (None, false) => SessionState::Fresh,
        }
    }

    /// The transport handle, for diagnostics
    #[must_use]
    pub fn transport(&self) -> &TransportHandle {
        &self.transport
    }

    /// Makes a GET request and decodes the response into `T`
    pub async fn get<T: DeserializeOwned>(&mut self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request with a JSON body and decodes the response into `T`
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &mut self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request with a JSON body and decodes the response into `T`
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &mut self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body and decodes the response into `T`
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &mut self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a DELETE request and decodes the response into `T`
    pub async fn delete<T: DeserializeOwned>(&mut self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<()>).await
    }

    /// Makes a request with any serializable body and decodes the response into `T`
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path appended to the base URL
    /// * `body` - Optional request body, sent as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - Same failures as `execute`, plus `SerializationError` when
    ///   the body cannot be converted to JSON
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        // No session, no work
        self.bearer_token()?;

        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::SerializationError(e.to_string()))?;

        self.dispatch(RequestDescriptor::new(path, method, body)).await
    }

    /// Runs one request through the pipeline and decodes its body
    async fn dispatch<T: DeserializeOwned>(
        &mut self,
        descriptor: RequestDescriptor,
    ) -> Result<T, AppError> {
        let text = self.send(&descriptor).await?;
        decode(text, descriptor.request_id)
    }

    /// Sends the request and returns the raw body of a response with status < 400
    async fn send(&mut self, descriptor: &RequestDescriptor) -> Result<String, AppError> {
        let token = self.bearer_token()?;
        let id = descriptor.request_id.as_str();

        let client = self
            .transport
            .acquire()
            .map_err(|e| e.with_request_id(id))?;
        let url = descriptor.url(&self.config.base_url);

        debug!("[{}] {} {}", id, descriptor.method, url);

        let mut request = client
            .request(descriptor.method.clone(), &url)
            .bearer_auth(token)
            .header(ACCEPT, JSON_CONTENT);

        if let Some(body) = &descriptor.body {
            debug!("[{}] Request body: {}", id, body);
            request = request.json(body);
        }

        let outcome = async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        }
        .await;

        let (status, text) = match outcome {
            Ok(parts) => parts,
            Err(e) => {
                self.transport.invalidate();
                error!("[{}] Request failed: {}", id, e);
                return Err(AppError::Transport {
                    source: e,
                    request_id: Some(id.to_string()),
                });
            }
        };

        debug!("[{}] Response {}: {}", id, status, text);

        if status.as_u16() >= 400 {
            error!("[{}] Request failed with status {}: {}", id, status, text);
            return Err(AppError::RequestFailure {
                status,
                body: text,
                request_id: id.to_string(),
            });
        }

        Ok(text)
    }

    /// The stored credential, or `Unauthenticated`
    fn bearer_token(&self) -> Result<String, AppError> {
        self.session
            .as_ref()
            .map(|s| s.token().to_string())
            .ok_or(AppError::Unauthenticated)
    }

    /// Issues the probe request; succeeds only on `200 OK`
    async fn probe(&mut self) -> Result<(), AppError> {
        let client = self.transport.acquire().map_err(handshake_error)?;
        let url = build_url(&self.config.base_url, LOGIN_PROBE_PATH);

        debug!("Sending login probe to: {}", url);

        let response = match client.get(&url).header(ACCEPT, JSON_CONTENT).send().await {
            Ok(response) => response,
            Err(e) => {
                self.transport.invalidate();
                return Err(handshake_error(e.into()));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Err(match response.text().await {
                Ok(body) => AppError::HandshakeFailure {
                    status: Some(status),
                    reason: body,
                    source: None,
                },
                Err(e) => {
                    self.transport.invalidate();
                    AppError::HandshakeFailure {
                        status: Some(status),
                        reason: e.to_string(),
                        source: Some(e),
                    }
                }
            });
        }

        Ok(())
    }
}

#[async_trait]
impl SessionApi for SessionClient {
    async fn login(&mut self) -> Result<(), AppError> {
        // A failed attempt must never leave the previous credential behind
        self.session = None;
        self.closed = false;

        match self.probe().await {
            Ok(()) => {
                self.session = Some(SessionToken::generate());
                info!("✓ Successfully logged in to {}", self.config.base_url);
                Ok(())
            }
            Err(e) => {
                error!("Login failed: {}", e);
                Err(e)
            }
        }
    }

    async fn execute(
        &mut self,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        self.bearer_token()?;
        self.dispatch(RequestDescriptor::new(endpoint, method, body))
            .await
    }

    fn close(&mut self) {
        self.transport.release();
        self.session = None;
        self.closed = true;
        debug!("Session closed");
    }
}

impl Default for SessionClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Decodes a response body, keeping the raw text on failure
fn decode<T: DeserializeOwned>(text: String, request_id: String) -> Result<T, AppError> {
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(source) => {
            error!("[{}] Failed to decode response: {}", request_id, source);
            Err(AppError::DecodeFailure {
                source,
                body: text,
                request_id,
            })
        }
    }
}

/// Turns a transport error raised during login into a handshake failure
fn handshake_error(err: AppError) -> AppError {
    match err {
        AppError::Transport { source, .. } => AppError::HandshakeFailure {
            status: None,
            reason: source.to_string(),
            source: Some(source),
        },
        other => other,
    }
}
