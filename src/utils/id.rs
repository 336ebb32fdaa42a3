use crate::constants::{CORRELATION_ID_ALPHABET, CORRELATION_ID_LENGTH};

/// Generates a short identifier used to correlate a request with its response in the logs.
///
/// The identifier is `CORRELATION_ID_LENGTH` characters long and composed of
/// uppercase English letters (`A-Z`) and numbers (`0-9`). It is not part of the
/// wire protocol.
///
/// # Examples
/// ```
/// use api_session_client::utils::id::correlation_id;
/// let id = correlation_id();
/// assert_eq!(id.len(), 8);
/// ```
#[must_use]
pub fn correlation_id() -> String {
    let alphabet: Vec<char> = CORRELATION_ID_ALPHABET.chars().collect();
    nanoid::nanoid!(CORRELATION_ID_LENGTH, &alphabet)
}

/// Generates a fresh random session credential.
///
/// Uses the default `nanoid` alphabet and length (21 URL-safe characters). The value
/// is a local simulation token and carries no cryptographic meaning.
#[must_use]
pub fn session_credential() -> String {
    nanoid::nanoid!()
}
