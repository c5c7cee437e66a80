/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::Session;
use chrono::Utc;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Profile metadata attached to a Supabase user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserMetadata {
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Identity of the authenticated user as returned by the auth endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    /// User identifier, used as `createdBy` for new collections
    pub id: String,
    /// Audience claim
    pub aud: String,
    /// Role claim
    pub role: String,
    /// Email address
    pub email: String,
    /// When the email was confirmed
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    /// When the last recovery email was sent
    #[serde(default)]
    pub recovery_sent_at: Option<String>,
    /// When the user last signed in
    #[serde(default)]
    pub last_sign_in_at: Option<String>,
    /// Profile metadata
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Body of a successful `/auth/v1/verify` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// New access token (JWT)
    pub access_token: String,
    /// New refresh token
    pub refresh_token: String,
    /// Authenticated user
    pub user: UserInfo,
}

impl From<AuthResponse> for Session {
    fn from(v: AuthResponse) -> Self {
        Session {
            access_token: v.access_token,
            refresh_token: v.refresh_token,
            user: Some(v.user),
            created_at: Utc::now().timestamp(),
        }
    }
}

/// Body of a `/auth/v1/token?grant_type=refresh_token` call
///
/// Both fields are optional: the session is only replaced when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    /// New access token
    #[serde(default)]
    pub access_token: Option<String>,
    /// New refresh token
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl RefreshTokenResponse {
    /// Returns the token pair when both halves are present and non-empty
    #[must_use]
    pub fn token_pair(self) -> Option<(String, String)> {
        match (self.access_token, self.refresh_token) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Some((access, refresh))
            }
            _ => None,
        }
    }
}
