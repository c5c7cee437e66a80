/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authentication module for the Mobbin API
//!
//! This module holds the session and handles:
//! - Seeding a session from an access token or a browser cookie
//! - The one-time code (magic link) email challenge
//! - Refresh token exchange
//! - Building the headers every request carries

use crate::application::config::Config;
use crate::constants::{
    ORIGIN, OTP_PATH, REFERER, SEC_CH_UA, SEC_CH_UA_PLATFORM, TOKEN_PATH, USER_AGENT,
    VERIFY_PATH, X_CLIENT_INFO,
};
use crate::error::AppError;
use crate::model::auth::{AuthResponse, RefreshTokenResponse, UserInfo};
use crate::model::http::{Headers, make_http_request, parse_response};
use crate::model::requests::{OtpRequest, RefreshTokenRequest, VerifyRequest};
use crate::utils::cookie::extract_access_token;
use chrono::Utc;
use reqwest::{Client, Method};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session information for authenticated requests
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Access token (JWT) sent as bearer token
    pub access_token: String,
    /// Refresh token, empty when the session was seeded from an access token
    pub refresh_token: String,
    /// Authenticated user, known only after a verified email challenge
    pub user: Option<UserInfo>,
    /// Unix timestamp (seconds) when the tokens were obtained
    pub created_at: i64,
}

impl Session {
    /// Creates a session from a bare access token
    #[must_use]
    pub fn from_access_token(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            refresh_token: String::new(),
            user: None,
            created_at: Utc::now().timestamp(),
        }
    }

    /// Checks whether a refresh can be attempted
    #[must_use]
    pub fn has_refresh_token(&self) -> bool {
        !self.refresh_token.is_empty()
    }
}

/// Builds the header set sent with every request
///
/// The bearer token is `token` when given, otherwise the anon key.
#[must_use]
pub fn build_headers(anon_key: &str, token: Option<&str>) -> Headers {
    let mut headers = Headers::new();
    headers.insert("apikey", anon_key.to_string());
    headers.insert("sec-ch-ua", SEC_CH_UA.to_string());
    headers.insert("sec-ch-ua-mobile", "?0".to_string());
    headers.insert("sec-ch-ua-platform", SEC_CH_UA_PLATFORM.to_string());
    headers.insert("User-Agent", USER_AGENT.to_string());
    headers.insert("Origin", ORIGIN.to_string());
    headers.insert("Referer", REFERER.to_string());
    headers.insert("X-Client-Info", X_CLIENT_INFO.to_string());
    headers.insert("Sec-Fetch-Site", "cross-site".to_string());
    headers.insert("Sec-Fetch-Mode", "cors".to_string());
    headers.insert("Sec-Fetch-Dest", "empty".to_string());
    headers.insert("Accept", "*/*".to_string());
    headers.insert(
        "Authorization",
        format!("Bearer {}", token.unwrap_or(anon_key)),
    );
    headers
}

fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(10).collect();
    format!("{head}...")
}

/// Session holder for the Mobbin API
///
/// Owns the current tokens and user identity. Operations that replace the
/// session only do so after a successful response, so a failed call leaves
/// the previous session in place.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: RwLock<Option<Session>>,
}

impl Auth {
    /// Creates an unauthenticated instance
    ///
    /// # Arguments
    /// * `config` - Shared configuration
    /// * `client` - Transport shared with the rest of the client
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: RwLock::new(None),
        }
    }

    /// Creates an instance seeded from an access token or a browser cookie
    ///
    /// A non-empty `access_token` is used as is, with an empty refresh token.
    /// Otherwise the first `"access_token":"<value>"` fragment of `cookie` is
    /// used. When neither yields a token the instance is unauthenticated.
    pub fn with_credentials(
        config: Arc<Config>,
        client: Client,
        access_token: Option<&str>,
        cookie: Option<&str>,
    ) -> Self {
        let token = match access_token.filter(|t| !t.is_empty()) {
            Some(token) => Some(token.to_string()),
            None => cookie.and_then(extract_access_token),
        };

        let session = match token {
            Some(token) => {
                debug!("Session seeded with token {}", token_preview(&token));
                Some(Session::from_access_token(&token))
            }
            None => {
                if cookie.is_some() {
                    warn!("No access token found in cookie, client is unauthenticated");
                }
                None
            }
        };

        Self {
            config,
            client,
            session: RwLock::new(session),
        }
    }

    /// Returns the headers for a request
    ///
    /// With `authenticated` set and a session present the bearer token is the
    /// session access token; in every other case it is the anon key.
    pub async fn headers(&self, authenticated: bool) -> Headers {
        let anon_key = self.config.credentials.anon_key.as_str();
        if !authenticated {
            return build_headers(anon_key, None);
        }
        let session = self.session.read().await;
        build_headers(anon_key, session.as_ref().map(|s| s.access_token.as_str()))
    }

    /// Asks the service to email a one-time code to `email`
    ///
    /// Unknown addresses are signed up.
    pub async fn send_email(&self, email: &str) -> Result<(), AppError> {
        let url = self.config.url(OTP_PATH);
        let headers = self.headers(false).await;
        let body = OtpRequest::new(email);

        info!("Requesting one-time code for {}", email);
        make_http_request(&self.client, Method::POST, &url, &headers, &[], Some(&body)).await?;
        info!("✓ One-time code sent");
        Ok(())
    }

    /// Completes the email challenge with the code the user received
    ///
    /// On success the session is replaced with the returned tokens and user.
    ///
    /// # Returns
    /// * `Ok(true)` - The session was replaced
    /// * `Err(AppError)` - The code was rejected or the response was malformed;
    ///   the previous session is kept
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<bool, AppError> {
        let url = self.config.url(VERIFY_PATH);
        let headers = self.headers(false).await;
        let body = VerifyRequest::new(email, code);

        debug!("Verifying one-time code for {}", email);
        let response =
            make_http_request(&self.client, Method::POST, &url, &headers, &[], Some(&body))
                .await?;
        let auth: AuthResponse = parse_response(response).await?;

        info!("✓ Login successful, user: {}", auth.user.email);
        let mut session = self.session.write().await;
        *session = Some(auth.into());
        Ok(true)
    }

    /// Exchanges the refresh token for a new token pair
    ///
    /// Does nothing without a session. The request is authorized with the
    /// anon key, not the current access token. The session is only replaced
    /// when the response carries both a new access token and a new refresh
    /// token; the user identity is kept.
    pub async fn refresh_token(&self) -> Result<(), AppError> {
        let refresh_token = {
            let session = self.session.read().await;
            match session.as_ref() {
                Some(s) => s.refresh_token.clone(),
                None => {
                    warn!("No session to refresh");
                    return Ok(());
                }
            }
        };

        let url = self.config.url(TOKEN_PATH);
        let headers = self.headers(false).await;
        let body = RefreshTokenRequest {
            refresh_token: &refresh_token,
        };

        info!("Refreshing access token");
        let response = make_http_request(
            &self.client,
            Method::POST,
            &url,
            &headers,
            &[("grant_type", "refresh_token")],
            Some(&body),
        )
        .await?;
        let tokens: RefreshTokenResponse = parse_response(response).await?;

        let Some((access_token, refresh_token)) = tokens.token_pair() else {
            warn!("Refresh response did not contain both tokens, keeping current session");
            return Ok(());
        };

        let mut session = self.session.write().await;
        if let Some(current) = session.as_mut() {
            current.access_token = access_token;
            current.refresh_token = refresh_token;
            current.created_at = Utc::now().timestamp();
            info!("✓ Token refreshed successfully");
        }
        Ok(())
    }

    /// Returns a copy of the current session, if any
    pub async fn get_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Replaces the current session
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    /// Returns true if a session is held
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Clears the current session
    pub async fn logout(&self) {
        info!("Logging out");
        *self.session.write().await = None;
    }
}
