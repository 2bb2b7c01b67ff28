use ig_session::error::AppError;
use ig_session::model::http::{ApiRequest, ApiResponse, Verb, build_url, query_pairs};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

#[test]
fn test_build_url_never_doubles_or_drops_separator() {
    let expected = "https://api.example.com/session";

    assert_eq!(build_url("https://api.example.com", "session"), expected);
    assert_eq!(build_url("https://api.example.com", "/session"), expected);
    assert_eq!(build_url("https://api.example.com/", "session"), expected);
    assert_eq!(build_url("https://api.example.com/", "/session"), expected);
}

#[test]
fn test_build_url_keeps_nested_paths_and_queries() {
    assert_eq!(
        build_url("https://demo-api.ig.com/gateway/deal", "/markets?epics=A,B"),
        "https://demo-api.ig.com/gateway/deal/markets?epics=A,B"
    );
}

#[test]
fn test_verb_from_method() {
    assert_eq!(Verb::try_from(&Method::GET).unwrap(), Verb::Get);
    assert_eq!(Verb::try_from(&Method::PUT).unwrap(), Verb::Put);
    assert_eq!(Verb::try_from(&Method::POST).unwrap(), Verb::Post);
    assert_eq!(Verb::try_from(&Method::DELETE).unwrap(), Verb::Delete);
}

#[test]
fn test_unsupported_methods_name_the_allowed_set() {
    for method in [Method::PATCH, Method::HEAD, Method::OPTIONS, Method::TRACE] {
        let err = Verb::try_from(&method).unwrap_err();
        match &err {
            AppError::InvalidOperation { verb, allowed } => {
                assert_eq!(verb, method.as_str());
                assert_eq!(allowed, "GET, PUT, POST, DELETE");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            format!(
                "operation \"{}\" is not allowed, please use one of \"GET, PUT, POST, DELETE\"",
                method.as_str()
            )
        );
    }
}

#[test]
fn test_verb_from_str_is_case_insensitive() {
    assert_eq!("get".parse::<Verb>().unwrap(), Verb::Get);
    assert_eq!("Delete".parse::<Verb>().unwrap(), Verb::Delete);
    assert!(matches!(
        "patch".parse::<Verb>(),
        Err(AppError::InvalidOperation { .. })
    ));
}

#[test]
fn test_verb_display_and_method_agree() {
    for verb in Verb::ALL {
        assert_eq!(verb.to_string(), verb.method().as_str());
    }
}

#[test]
fn test_api_request_defaults() {
    let request = ApiRequest::get("accounts");

    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "accounts");
    assert_eq!(request.version, 1);
    assert!(request.params.is_none());
    assert!(request.content_type.is_none());
    assert!(request.encoding.is_none());
}

#[test]
fn test_api_request_builder() {
    #[derive(serde::Serialize)]
    struct Body {
        size: u32,
    }

    let request = ApiRequest::post("positions/otc")
        .version(2)
        .params(&Body { size: 1 })
        .unwrap()
        .content_type("application/json")
        .encoding("UTF-8");

    assert_eq!(request.method, Method::POST);
    assert_eq!(request.version, 2);
    assert_eq!(request.params, Some(json!({"size": 1})));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.encoding.as_deref(), Some("UTF-8"));
}

#[test]
fn test_query_pairs_flattens_scalars_and_skips_null() {
    let mut pairs = query_pairs(&json!({
        "searchTerm": "EUR/USD",
        "pageSize": 20,
        "detailed": true,
        "from": null
    }))
    .unwrap();
    pairs.sort();

    assert_eq!(
        pairs,
        vec![
            ("detailed".to_string(), "true".to_string()),
            ("pageSize".to_string(), "20".to_string()),
            ("searchTerm".to_string(), "EUR/USD".to_string()),
        ]
    );
}

#[test]
fn test_query_pairs_rejects_non_objects() {
    let err = query_pairs(&json!(["a", "b"])).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_api_response_json_and_headers() {
    let mut headers = HeaderMap::new();
    headers.insert("CST", HeaderValue::from_static("B"));
    let response = ApiResponse {
        status: StatusCode::OK,
        headers,
        body: r#"{"accountId":"ABC123"}"#.to_string(),
    };

    assert_eq!(response.header("cst"), Some("B"));
    assert_eq!(response.header("X-SECURITY-TOKEN"), None);
    let body: Value = response.json().unwrap();
    assert_eq!(body["accountId"], "ABC123");
}

#[test]
fn test_api_response_empty_body_is_null() {
    let response = ApiResponse {
        status: StatusCode::NO_CONTENT,
        headers: HeaderMap::new(),
        body: String::new(),
    };

    let body: Value = response.json().unwrap();
    assert_eq!(body, Value::Null);
}

#[test]
fn test_api_response_invalid_json_is_reported() {
    let response = ApiResponse {
        status: StatusCode::OK,
        headers: HeaderMap::new(),
        body: "not json".to_string(),
    };

    assert!(matches!(response.json::<Value>(), Err(AppError::Json(_))));
}
