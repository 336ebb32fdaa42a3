/// Session client implementation
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Lazily created HTTP transport
pub mod transport;
