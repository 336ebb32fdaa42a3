/// Default base URL for the REST service (public demo host)
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
/// Default timeout in seconds applied to every network operation
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Path requested during login to check that the service is reachable
pub const LOGIN_PROBE_PATH: &str = "/posts/1";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "api-session-client/0.1.0";
/// Length of the per-request correlation id written to the logs
pub const CORRELATION_ID_LENGTH: usize = 8;
/// Alphabet used to build correlation ids
pub const CORRELATION_ID_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Environment variable holding the base URL, read by `Config::from_env`
pub const ENV_BASE_URL: &str = "API_BASE_URL";
/// Environment variable holding the timeout in seconds, read by `Config::from_env`
pub const ENV_TIMEOUT_SECS: &str = "API_TIMEOUT_SECS";
