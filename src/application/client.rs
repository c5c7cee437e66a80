/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the Mobbin API
//!
//! The client owns the transport and the session holder. The transport is
//! created with the client and released when the client is closed or
//! dropped.
//!
//! # Example
//! ```ignore
//! use mobbin_client::prelude::*;
//!
//! let client = Client::with_access_token(Config::new(), "eyJ...")?;
//! let apps = client.get_web_apps(Some(10)).await?;
//! client.close();
//! ```

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::interfaces::apps::AppService;
use crate::application::interfaces::collections::CollectionService;
use crate::constants::{APPS_RPC_PATH, COLLECTIONS_PATH, WORKSPACES_PATH, WORKSPACES_SELECT};
use crate::error::AppError;
use crate::model::http::{make_http_request, parse_response};
use crate::model::pagination::collect_pages;
use crate::model::requests::{AppFilterRequest, CreateCollectionRequest};
use crate::presentation::app::{App, Platform};
use crate::presentation::collection::{Collection, Workspace, first_workspace_collections};
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Async client for the Mobbin API
///
/// Calls are sequential: the session is read and written without
/// coordination between operations, so authentication calls must not run
/// concurrently with fetches on the same client.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates an unauthenticated client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and anon key
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to run the email challenge
    /// * `Err(AppError)` - If the transport cannot be created
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_credentials(config, None, None)
    }

    /// Creates a client authenticated with an existing access token
    pub fn with_access_token(config: Config, access_token: &str) -> Result<Self, AppError> {
        Self::with_credentials(config, Some(access_token), None)
    }

    /// Creates a client authenticated from a browser `sb-...-auth-token` cookie
    ///
    /// The client is unauthenticated if the cookie holds no access token.
    pub fn with_cookie(config: Config, cookie: &str) -> Result<Self, AppError> {
        Self::with_credentials(config, None, Some(cookie))
    }

    /// Creates a client from optional credentials
    ///
    /// `access_token` takes precedence over `cookie`.
    pub fn with_credentials(
        config: Config,
        access_token: Option<&str>,
        cookie: Option<&str>,
    ) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let mut builder = HttpInternalClient::builder();
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        let auth = Arc::new(Auth::with_credentials(
            config.clone(),
            http_client.clone(),
            access_token,
            cookie,
        ));

        debug!("Client created for {}", config.rest_api.base_url);
        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Asks the service to email a one-time code to `email`
    pub async fn send_email(&self, email: &str) -> Result<(), AppError> {
        self.auth.send_email(email).await
    }

    /// Completes the email challenge, replacing the session on success
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<bool, AppError> {
        self.auth.verify_code(email, code).await
    }

    /// Exchanges the refresh token for a new token pair
    pub async fn refresh_token(&self) -> Result<(), AppError> {
        self.auth.refresh_token().await
    }

    /// Gets a copy of the current session
    pub async fn get_session(&self) -> Option<Session> {
        self.auth.get_session().await
    }

    /// Clears the current session
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Gets a reference to the session holder
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Closes the client, releasing the transport
    pub fn close(self) {
        debug!("Closing client");
        drop(self);
    }
}

#[async_trait]
impl AppService for Client {
    async fn get_apps(
        &self,
        platform: Platform,
        limit: Option<usize>,
    ) -> Result<Vec<App>, AppError> {
        info!("Fetching {} apps (limit: {:?})", platform, limit);

        let url = self.config.url(APPS_RPC_PATH);
        let mut headers = self.auth.headers(true).await;
        headers.insert("Content-Profile", "public".to_string());

        let page_size = self.config.page_size;
        let http_client = &self.http_client;
        let url = url.as_str();
        let headers = &headers;

        collect_pages(limit, move |cursor| {
            let body = AppFilterRequest::new(platform, page_size, cursor);
            async move {
                let response =
                    make_http_request(http_client, Method::POST, url, headers, &[], Some(&body))
                        .await?;
                parse_response::<Vec<App>>(response).await
            }
        })
        .await
    }
}

#[async_trait]
impl CollectionService for Client {
    async fn get_workspaces(&self) -> Result<Vec<Workspace>, AppError> {
        if !self.auth.is_authenticated().await {
            warn!("Not authenticated, no workspaces to fetch");
            return Ok(Vec::new());
        }

        let url = self.config.url(WORKSPACES_PATH);
        let headers = self.auth.headers(true).await;

        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            &headers,
            &[("select", WORKSPACES_SELECT)],
            None::<&()>,
        )
        .await?;
        let workspaces: Vec<Workspace> = parse_response(response).await?;

        info!("Fetched {} workspaces", workspaces.len());
        Ok(workspaces)
    }

    async fn get_collections(&self) -> Result<Vec<Collection>, AppError> {
        if !self.auth.is_authenticated().await {
            warn!("Not authenticated, no collections to fetch");
            return Ok(Vec::new());
        }

        let url = self.config.url(WORKSPACES_PATH);
        let headers = self.auth.headers(true).await;

        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            &headers,
            &[("select", WORKSPACES_SELECT)],
            None::<&()>,
        )
        .await?;
        let data: Value = parse_response(response).await?;
        let collections = first_workspace_collections(data)?;

        info!("Fetched {} collections", collections.len());
        Ok(collections)
    }

    async fn create_collection(
        &self,
        name: &str,
        description: &str,
        workspace_id: &str,
    ) -> Result<(), AppError> {
        let Some(user_id) = self
            .auth
            .get_session()
            .await
            .and_then(|s| s.user)
            .map(|u| u.id)
        else {
            return Err(AppError::NotAuthenticated);
        };

        let url = self.config.url(COLLECTIONS_PATH);
        let mut headers = self.auth.headers(true).await;
        headers.insert("Prefer", "return=minimal".to_string());
        headers.insert("Accept", "application/vnd.pgrst.object+json".to_string());
        headers.insert("Content-Profile", "public".to_string());

        let body = CreateCollectionRequest {
            workspace_id,
            name,
            description,
            created_by: &user_id,
        };

        let response =
            make_http_request(&self.http_client, Method::POST, &url, &headers, &[], Some(&body))
                .await?;
        debug!("Create collection status: {}", response.status());

        info!("✓ Collection '{}' created in workspace {}", name, workspace_id);
        Ok(())
    }
}
