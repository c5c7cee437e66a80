//! Access-token extraction from Supabase browser cookies
//!
//! The browser stores the session as
//! `sb-<project>-auth-token.0={"access_token":"...","refresh_token":"...",...}`.
//! The token is pulled out with a plain pattern match on the first
//! `"access_token":"<value>"` fragment rather than a JSON parse, so cookies that
//! are truncated or split across several `.N` chunks still yield a token as
//! long as that fragment is intact. This is knowingly lenient: any text that
//! contains the fragment is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

static ACCESS_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""access_token":"([^"]+)""#).expect("access token pattern is valid")
});

/// Returns the first `"access_token":"<value>"` value found in `cookie`
///
/// # Examples
/// ```
/// use mobbin_client::utils::extract_access_token;
///
/// let cookie = r#"sb-x-auth-token.0={"access_token":"abc","refresh_token":"def"}"#;
/// assert_eq!(extract_access_token(cookie).as_deref(), Some("abc"));
/// assert_eq!(extract_access_token("no token here"), None);
/// ```
#[must_use]
pub fn extract_access_token(cookie: &str) -> Option<String> {
    ACCESS_TOKEN_RE
        .captures(cookie)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
