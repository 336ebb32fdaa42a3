use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Environment variable controlling the log level
const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Installs a global `tracing` subscriber, once per process.
///
/// The level is read from the `LOGLEVEL` environment variable (`DEBUG`, `INFO`,
/// `WARN`, `ERROR` or `TRACE`, case-insensitive) and defaults to `INFO`. Calling it
/// again, or after another subscriber was installed, does nothing.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var(LOG_LEVEL_ENV).unwrap_or_default());

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}

/// Maps a textual level to a `tracing::Level`, falling back to `INFO`
fn parse_level(value: &str) -> Level {
    match value.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
