// Shared fixtures for unit tests
#![allow(dead_code)]

use mobbin_client::prelude::*;
use serde_json::{Value, json};

pub const TEST_ANON_KEY: &str = "test_anon_key";

/// Creates a config pointing at the mock server
pub fn create_test_config(server_url: &str) -> Config {
    Config::with_base_url(server_url, TEST_ANON_KEY)
}

/// Wire representation of an app whose cursor fields derive from `id`
pub fn app_json(id: &str) -> Value {
    json!({
        "id": id,
        "appName": format!("App {id}"),
        "appCategory": "Social",
        "appLogoUrl": "https://logo.example.com/app.png",
        "appTagline": "Tagline",
        "companyHqRegion": "US",
        "companyStage": "IPO",
        "platform": "web",
        "createdAt": "2023-01-01T00:00:00Z",
        "appVersionId": format!("v-{id}"),
        "appVersionCreatedAt": "2023-01-01T00:00:00Z",
        "appVersionUpdatedAt": format!("updated-{id}"),
        "appVersionPublishedAt": format!("published-{id}"),
        "previewScreenUrls": [format!("https://img.example.com/{id}.png")]
    })
}

/// Decoded form of [`app_json`]
pub fn app(id: &str) -> App {
    serde_json::from_value(app_json(id)).expect("valid app fixture")
}

/// A page of apps with ids `{prefix}0 .. {prefix}{count - 1}`
pub fn page_json(prefix: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| app_json(&format!("{prefix}{i}")))
            .collect(),
    )
}

/// A session with both tokens and a user identity
pub fn full_session() -> Session {
    Session {
        access_token: "acc".to_string(),
        refresh_token: "ref".to_string(),
        user: Some(UserInfo {
            id: "u1".to_string(),
            aud: "authenticated".to_string(),
            role: "authenticated".to_string(),
            email: "e@mail.com".to_string(),
            email_confirmed_at: None,
            recovery_sent_at: None,
            last_sign_in_at: None,
            user_metadata: UserMetadata::default(),
        }),
        created_at: 0,
    }
}
