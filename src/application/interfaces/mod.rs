/// Session lifecycle interface
pub mod session;
