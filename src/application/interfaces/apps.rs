use crate::error::AppError;
use crate::presentation::app::{App, AppList, Platform};
use async_trait::async_trait;

/// Interface for the app listing service
#[async_trait]
pub trait AppService: Send + Sync {
    /// Fetches apps for `platform`, following the cursor across pages
    ///
    /// # Arguments
    /// * `platform` - Platform filter
    /// * `limit` - Maximum number of apps to return; `None` fetches until the
    ///   service returns an empty page
    ///
    /// # Returns
    /// Apps in the order the service returned them, at most `limit` of them
    async fn get_apps(&self, platform: Platform, limit: Option<usize>)
    -> Result<Vec<App>, AppError>;

    /// Fetches iOS apps
    async fn get_ios_apps(&self, limit: Option<usize>) -> Result<Vec<App>, AppError> {
        self.get_apps(Platform::Ios, limit).await
    }

    /// Fetches web apps
    async fn get_web_apps(&self, limit: Option<usize>) -> Result<Vec<App>, AppError> {
        self.get_apps(Platform::Web, limit).await
    }

    /// Fetches web apps wrapped in a printable [`AppList`]
    async fn get_web_apps_table(&self, limit: Option<usize>) -> Result<AppList, AppError> {
        Ok(AppList::from(self.get_web_apps(limit).await?))
    }
}
