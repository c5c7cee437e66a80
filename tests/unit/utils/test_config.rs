use mobbin_client::application::config::Config;
use mobbin_client::constants::DEFAULT_PAGE_SIZE;
use mobbin_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn with_base_url_trims_trailing_slash() {
    let config = Config::with_base_url("http://localhost:1234/", "anon");
    assert_eq!(config.rest_api.base_url, "http://localhost:1234");
    assert_eq!(config.credentials.anon_key, "anon");
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.rest_api.timeout, None);
}

#[test]
fn url_joins_paths() {
    let config = Config::with_base_url("http://localhost:1234", "anon");
    assert_eq!(config.url("/auth/v1/otp"), "http://localhost:1234/auth/v1/otp");
    assert_eq!(config.url("rest/v1/collections"), "http://localhost:1234/rest/v1/collections");
}

#[test]
fn env_helpers_fall_back_when_unset() {
    assert_eq!(get_env_or_default("MOBBIN_TEST_SURELY_UNSET_VAR", 42u32), 42);
    assert_eq!(get_env_or_none::<u64>("MOBBIN_TEST_SURELY_UNSET_VAR"), None);
}

#[test]
fn config_serializes() {
    let config = Config::with_base_url("http://localhost", "anon");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["rest_api"]["base_url"], "http://localhost");
    assert_eq!(value["page_size"], 24);
}
