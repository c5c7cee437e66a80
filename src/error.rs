/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by every fallible operation of the client
#[derive(Debug)]
pub enum AppError {
    /// Connection, DNS or TLS failure reported by the transport
    Network(reqwest::Error),
    /// The service answered with a non-2xx status
    RequestFailed {
        /// Status code returned by the service
        status: StatusCode,
        /// Raw response body, empty if it could not be read
        body: String,
    },
    /// The response body did not match the expected structure
    Json(serde_json::Error),
    /// A loosely-typed response had an unexpected shape
    Deserialization(String),
    /// The operation needs an authenticated session
    NotAuthenticated,
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::RequestFailed { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::NotAuthenticated => write!(f, "not authenticated"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl AppError {
    /// Returns the HTTP status carried by a [`AppError::RequestFailed`]
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
