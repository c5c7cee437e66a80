/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Mobbin Client Prelude
//!
//! Brings the client, its service traits, the models and the error type into
//! scope with a single import.
//!
//! ```rust
//! use mobbin_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:54321", "anon");
//! let client = Client::new(config).unwrap();
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND SERVICES
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Session holder
pub use crate::application::auth::{Auth, Session};

/// Service traits
pub use crate::application::interfaces::apps::AppService;
pub use crate::application::interfaces::collections::CollectionService;

// ============================================================================
// MODELS
// ============================================================================

/// Authentication models
pub use crate::model::auth::{UserInfo, UserMetadata};

/// Pagination
pub use crate::model::pagination::{AppCursor, collect_pages};

/// Domain records
pub use crate::presentation::app::{App, AppList, Platform};
pub use crate::presentation::collection::{Collection, Workspace};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};
