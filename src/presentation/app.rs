/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform filter accepted by the app listing RPC
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS apps
    Ios,
    /// Web apps
    Web,
}

impl Platform {
    /// Wire value of the filter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Web => "web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One app returned by the listing RPC
///
/// Timestamps are kept as the strings the service sends, since they are fed
/// back verbatim as pagination cursors.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// App identifier
    pub id: String,
    /// Display name
    pub app_name: String,
    /// Category
    pub app_category: String,
    /// Logo image URL
    pub app_logo_url: String,
    /// Tagline
    pub app_tagline: String,
    /// Headquarters region of the company
    pub company_hq_region: String,
    /// Funding stage of the company
    pub company_stage: String,
    /// Platform (`ios` or `web`)
    pub platform: String,
    /// When the app was added
    pub created_at: String,
    /// Identifier of the listed version
    pub app_version_id: String,
    /// When the version was created
    pub app_version_created_at: String,
    /// When the version was last updated
    pub app_version_updated_at: String,
    /// When the version was published
    pub app_version_published_at: String,
    /// Preview screenshot URLs
    pub preview_screen_urls: Vec<String>,
    /// Visual style, if classified
    #[serde(default)]
    pub app_style: Option<String>,
}

/// Ordered list of apps with a table rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppList {
    /// Apps in the order they were fetched
    pub apps: Vec<App>,
}

impl AppList {
    /// Returns the number of apps
    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Returns true if the list holds no apps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Returns an iterator over the apps
    pub fn iter(&self) -> impl Iterator<Item = &App> {
        self.apps.iter()
    }

    /// Consumes the list, returning the apps
    #[must_use]
    pub fn into_inner(self) -> Vec<App> {
        self.apps
    }
}

impl From<Vec<App>> for AppList {
    fn from(apps: Vec<App>) -> Self {
        Self { apps }
    }
}

impl fmt::Display for AppList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("NAME"),
            Cell::new("CATEGORY"),
            Cell::new("PLATFORM"),
            Cell::new("TAGLINE"),
            Cell::new("PUBLISHED"),
        ]));

        for app in &self.apps {
            let tagline = truncate(&app.app_tagline, 40);
            // date part only
            let published = app
                .app_version_published_at
                .split('T')
                .next()
                .unwrap_or(&app.app_version_published_at);

            table.add_row(Row::new(vec![
                Cell::new(&app.app_name),
                Cell::new(&app.app_category),
                Cell::new(&app.platform),
                Cell::new(&tagline),
                Cell::new(published),
            ]));
        }

        write!(f, "{table}")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
