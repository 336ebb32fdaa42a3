use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// Interface for a client holding an authenticated session
///
/// Every method takes `&mut self`: one instance serves one sequential flow of
/// calls. Share it between tasks only behind an external lock.
#[async_trait]
pub trait SessionApi: Send {
    /// Performs the login handshake and stores a fresh session credential
    ///
    /// # Returns
    /// * `Ok(())` - The client is ready to execute requests
    /// * `Err(AppError::HandshakeFailure)` - The probe request did not return `200 OK`;
    ///   no credential is held afterwards
    async fn login(&mut self) -> Result<(), AppError>;

    /// Executes a request against `endpoint` with the stored credential
    ///
    /// # Arguments
    /// * `endpoint` - Path appended to the base URL (e.g. "/posts/1")
    /// * `method` - HTTP method
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(Value)` - Decoded JSON response
    /// * `Err(AppError)` - `Unauthenticated` without a session, `RequestFailure` for
    ///   status >= 400, `Transport` for network errors, `DecodeFailure` for malformed JSON
    async fn execute(
        &mut self,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, AppError>;

    /// Releases the transport and forgets the credential. Never fails.
    fn close(&mut self);
}
