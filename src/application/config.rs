/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{BASE_URL, DEFAULT_ANON_KEY, DEFAULT_PAGE_SIZE};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Project credentials shared by every request
pub struct Credentials {
    /// Supabase anon key, sent as `apikey` and as the fallback bearer token
    pub anon_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Supabase project, without trailing path
    pub base_url: String,
    /// Transport timeout in seconds; `None` leaves the transport default in place
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Mobbin client
///
/// Built once and shared behind an `Arc`; the client never mutates it.
pub struct Config {
    /// Project credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of apps requested per page
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment, with built-in defaults
    ///
    /// Reads a `.env` file if present, then:
    /// - `MOBBIN_BASE_URL` (default: the Mobbin Supabase project)
    /// - `MOBBIN_ANON_KEY`
    /// - `MOBBIN_REST_TIMEOUT` in seconds (default: none)
    /// - `MOBBIN_PAGE_SIZE` (default: 24)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let anon_key = get_env_or_default("MOBBIN_ANON_KEY", String::from(DEFAULT_ANON_KEY));
        if anon_key == DEFAULT_ANON_KEY {
            error!("MOBBIN_ANON_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { anon_key },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("MOBBIN_BASE_URL", String::from(BASE_URL)),
                timeout: get_env_or_none("MOBBIN_REST_TIMEOUT"),
            },
            page_size: get_env_or_default("MOBBIN_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Creates a configuration pointing at `base_url` with the given anon key
    ///
    /// Does not touch the environment. Mostly useful for tests and proxies.
    #[must_use]
    pub fn with_base_url(base_url: &str, anon_key: &str) -> Self {
        Config {
            credentials: Credentials {
                anon_key: anon_key.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: None,
            },
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Joins an endpoint path onto the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
