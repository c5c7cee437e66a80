use mobbin_client::utils::cookie::extract_access_token;

#[test]
fn extracts_token_from_supabase_cookie() {
    let cookie = r#"sb-ujasntkfphywizsdaapi-auth-token.0={"access_token":"eyJhbGciOi.abc.def","token_type":"bearer","refresh_token":"r1"}"#;
    assert_eq!(
        extract_access_token(cookie).as_deref(),
        Some("eyJhbGciOi.abc.def")
    );
}

#[test]
fn takes_first_occurrence() {
    let cookie = r#"{"access_token":"one"} {"access_token":"two"}"#;
    assert_eq!(extract_access_token(cookie).as_deref(), Some("one"));
}

#[test]
fn matches_fragment_in_otherwise_invalid_json() {
    let cookie = r#"garbage "access_token":"tok" more garbage"#;
    assert_eq!(extract_access_token(cookie).as_deref(), Some("tok"));
}

#[test]
fn no_match_returns_none() {
    assert_eq!(extract_access_token(""), None);
    assert_eq!(extract_access_token(r#"{"access_token": "spaced"}"#), None);
    assert_eq!(extract_access_token(r#"{"access_token":""}"#), None);
}
