use ig_session::session::headers::{HeaderContext, compose_headers};
use ig_session::session::state::SessionTokens;

fn context(tokens: Option<&SessionTokens>) -> HeaderContext<'_> {
    HeaderContext {
        api_key: "test-api-key",
        version: 1,
        content_type: None,
        encoding: None,
        tokens,
    }
}

#[test]
fn test_default_headers_without_session() {
    let headers = compose_headers(&context(None));

    assert_eq!(headers.len(), 4);
    assert_eq!(
        headers.get("Content-Type"),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(headers.get("Accept"), Some("application/json; charset=utf-8"));
    assert_eq!(headers.get("X-IG-API-KEY"), Some("test-api-key"));
    assert_eq!(headers.get("Version"), Some("1"));
    assert!(!headers.contains("X-SECURITY-TOKEN"));
    assert!(!headers.contains("CST"));
}

#[test]
fn test_token_pair_is_added_verbatim() {
    let tokens = SessionTokens::new("A", "B");
    let headers = compose_headers(&context(Some(&tokens)));

    assert_eq!(headers.len(), 6);
    assert_eq!(headers.get("X-SECURITY-TOKEN"), Some("A"));
    assert_eq!(headers.get("CST"), Some("B"));
}

#[test]
fn test_version_is_passed_through() {
    for version in [1, 2, 3] {
        let mut ctx = context(None);
        ctx.version = version;
        let headers = compose_headers(&ctx);
        assert_eq!(headers.get("Version"), Some(version.to_string().as_str()));
    }
}

#[test]
fn test_content_type_and_encoding_overrides() {
    let mut ctx = context(None);
    ctx.content_type = Some("text/plain");
    let headers = compose_headers(&ctx);
    assert_eq!(headers.get("Content-Type"), Some("text/plain; charset=utf-8"));

    ctx.content_type = None;
    ctx.encoding = Some("iso-8859-1");
    let headers = compose_headers(&ctx);
    assert_eq!(
        headers.get("Accept"),
        Some("application/json; charset=iso-8859-1")
    );
}

#[test]
fn test_header_lookup_is_case_insensitive() {
    let tokens = SessionTokens::new("A", "B");
    let headers = compose_headers(&context(Some(&tokens)));

    assert_eq!(headers.get("x-security-token"), Some("A"));
    assert_eq!(headers.get("cst"), Some("B"));
}

#[test]
fn test_composition_is_pure() {
    let tokens = SessionTokens::new("A", "B");
    let first = compose_headers(&context(Some(&tokens)));
    let second = compose_headers(&context(Some(&tokens)));

    assert_eq!(first, second);
    let names: Vec<&str> = first.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "Content-Type",
            "Accept",
            "X-IG-API-KEY",
            "Version",
            "X-SECURITY-TOKEN",
            "CST"
        ]
    );
}

#[test]
fn test_session_tokens_debug_hides_values() {
    let tokens = SessionTokens::new("secret-a", "secret-b");
    let debug = format!("{tokens:?}");

    assert!(!debug.contains("secret-a"));
    assert!(!debug.contains("secret-b"));
}
