/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::pagination::AppCursor;
use crate::presentation::app::Platform;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the one-time code request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OtpRequest<'a> {
    /// Address that receives the code
    pub email: &'a str,
    /// Sign up the address if it is unknown
    pub create_user: bool,
    /// Captcha payload, always empty
    pub gotrue_meta_security: Map<String, Value>,
}

impl<'a> OtpRequest<'a> {
    /// Creates a request that signs up unknown addresses
    pub fn new(email: &'a str) -> Self {
        Self {
            email,
            create_user: true,
            gotrue_meta_security: Map::new(),
        }
    }
}

/// Body of the one-time code verification
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerifyRequest<'a> {
    /// Address the code was sent to
    pub email: &'a str,
    /// The code typed by the user
    pub token: &'a str,
    /// Verification type, always `magiclink`
    #[serde(rename = "type")]
    pub verify_type: &'a str,
}

impl<'a> VerifyRequest<'a> {
    /// Creates a magic-link verification request
    pub fn new(email: &'a str, code: &'a str) -> Self {
        Self {
            email,
            token: code,
            verify_type: "magiclink",
        }
    }
}

/// Body of the token refresh
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RefreshTokenRequest<'a> {
    /// Refresh token of the current session
    pub refresh_token: &'a str,
}

/// Body of the filtered app listing RPC
///
/// The category, stage, style and region filters are always sent as `null`.
/// The cursor fields are `null` on the first page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppFilterRequest {
    /// Category filter
    pub filter_app_categories: Option<Vec<String>>,
    /// Company stage filter
    pub filter_app_company_stages: Option<Vec<String>>,
    /// Platform filter
    pub filter_app_platform: Platform,
    /// How filters combine
    pub filter_operator: String,
    /// Style filter
    pub filter_app_styles: Option<Vec<String>>,
    /// Region filter
    pub filter_app_regions: Option<Vec<String>>,
    /// Number of apps per page
    pub page_size: u32,
    /// Identifier of the last app of the previous page
    pub last_app_id: Option<String>,
    /// `appVersionUpdatedAt` of the last app of the previous page
    pub last_app_version_updated_at: Option<String>,
    /// `appVersionPublishedAt` of the last app of the previous page
    pub last_app_version_published_at: Option<String>,
}

impl AppFilterRequest {
    /// Builds the request for one page of `platform` apps after `cursor`
    #[must_use]
    pub fn new(platform: Platform, page_size: u32, cursor: AppCursor) -> Self {
        Self {
            filter_app_categories: None,
            filter_app_company_stages: None,
            filter_app_platform: platform,
            filter_operator: "and".to_string(),
            filter_app_styles: None,
            filter_app_regions: None,
            page_size,
            last_app_id: cursor.last_app_id,
            last_app_version_updated_at: cursor.last_app_version_updated_at,
            last_app_version_published_at: cursor.last_app_version_published_at,
        }
    }
}

/// Body of the collection creation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest<'a> {
    /// Workspace that will own the collection
    pub workspace_id: &'a str,
    /// Collection name
    pub name: &'a str,
    /// Collection description
    pub description: &'a str,
    /// Identifier of the creating user
    pub created_by: &'a str,
}
