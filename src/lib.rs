//! # Mobbin Client
//!
//! Async client for the Mobbin web service, built on its Supabase REST and
//! authentication endpoints.
//!
//! ## Features
//!
//! - Email one-time code (magic link) login, or reuse of an existing access
//!   token or browser cookie
//! - Refresh token exchange
//! - Cursor-paginated app listings for iOS and web, with an optional limit
//! - Workspace and collection listing, and collection creation
//! - Table rendering of app listings
//!
//! ## Example
//!
//! ```ignore
//! use mobbin_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!     client.send_email("me@example.com").await?;
//!     // read the code from the email, then
//!     client.verify_code("me@example.com", "123456").await?;
//!     let apps = client.get_web_apps_table(Some(10)).await?;
//!     println!("{apps}");
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads `MOBBIN_BASE_URL`,
//! `MOBBIN_ANON_KEY`, `MOBBIN_REST_TIMEOUT` and `MOBBIN_PAGE_SIZE` from the
//! environment or a `.env` file.

/// Session holder, client facade, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Wire models, HTTP helper and pagination
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain records returned to callers
pub mod presentation;
/// Environment, cookie and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
