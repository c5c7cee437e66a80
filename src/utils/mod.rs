/// Module containing environment variable helpers used by the configuration
pub mod config;
/// Module containing cookie parsing utilities
pub mod cookie;
/// Module containing logging utilities
pub mod logger;

pub use cookie::*;
pub use logger::*;
