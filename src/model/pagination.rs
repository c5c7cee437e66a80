/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Cursor pagination over the app listing RPC
//!
//! The service orders apps by a server-defined key and pages with a keyset
//! cursor: each request carries the identifier and the two version
//! timestamps of the last app of the previous page. [`collect_pages`] drives
//! that loop for any platform; the page fetch itself is supplied by the
//! caller, so the loop does not know about HTTP.
//!
//! There is no iteration cap. A server that keeps returning non-empty pages
//! for a repeating cursor makes [`collect_pages`] loop forever when no limit
//! is given.

use crate::error::AppError;
use crate::presentation::app::App;
use std::future::Future;
use tracing::{debug, info};

/// Keyset cursor taken from the last app of a page
///
/// All fields are `None` for the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppCursor {
    /// Identifier of the last app
    pub last_app_id: Option<String>,
    /// `appVersionUpdatedAt` of the last app
    pub last_app_version_updated_at: Option<String>,
    /// `appVersionPublishedAt` of the last app
    pub last_app_version_published_at: Option<String>,
}

impl AppCursor {
    /// Cursor for the first page
    #[must_use]
    pub fn start() -> Self {
        Self::default()
    }

    /// Cursor for the page following the one that ended with `app`
    #[must_use]
    pub fn after(app: &App) -> Self {
        Self {
            last_app_id: Some(app.id.clone()),
            last_app_version_updated_at: Some(app.app_version_updated_at.clone()),
            last_app_version_published_at: Some(app.app_version_published_at.clone()),
        }
    }

    /// Returns true if this is the first-page cursor
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.last_app_id.is_none()
            && self.last_app_version_updated_at.is_none()
            && self.last_app_version_published_at.is_none()
    }
}

/// Fetches pages until the service runs dry or `limit` apps are collected
///
/// `fetch_page` is called with [`AppCursor::start`] first, then with the
/// cursor of the last app of the page it just returned. Pages are appended
/// in arrival order. An empty page ends the loop. Once at least `limit` apps
/// are held the result is truncated to exactly `limit` and no further page is
/// requested. `None` and `Some(0)` both mean no limit.
///
/// # Errors
/// Returns the first error produced by `fetch_page`; apps collected before it
/// are discarded.
pub async fn collect_pages<F, Fut>(
    limit: Option<usize>,
    mut fetch_page: F,
) -> Result<Vec<App>, AppError>
where
    F: FnMut(AppCursor) -> Fut,
    Fut: Future<Output = Result<Vec<App>, AppError>>,
{
    let limit = limit.filter(|&l| l > 0);
    let mut all_apps: Vec<App> = Vec::new();
    let mut cursor = AppCursor::start();
    let mut pages = 0usize;

    loop {
        let page = fetch_page(cursor).await?;
        pages += 1;

        let Some(last) = page.last() else {
            debug!("Page {} is empty, no more apps", pages);
            break;
        };
        let next_cursor = AppCursor::after(last);

        debug!("Page {}: {} apps", pages, page.len());
        all_apps.extend(page);

        if let Some(limit) = limit {
            if all_apps.len() >= limit {
                all_apps.truncate(limit);
                break;
            }
        }

        cursor = next_cursor;
    }

    info!("Fetched {} apps in {} requests", all_apps.len(), pages);
    Ok(all_apps)
}
