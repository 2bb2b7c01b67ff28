use ig_session::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("IG_SESSION_TEST_STRING", "test_value");
    }
    let result: String = get_env_or_default("IG_SESSION_TEST_STRING", "default".to_string());
    assert_eq!(result, "test_value");
    unsafe {
        env::remove_var("IG_SESSION_TEST_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("IG_SESSION_TEST_MISSING");
    }
    let result: String = get_env_or_default("IG_SESSION_TEST_MISSING", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("IG_SESSION_TEST_INVALID", "not_a_number");
    }
    let result: u64 = get_env_or_default("IG_SESSION_TEST_INVALID", 30);
    assert_eq!(result, 30);
    unsafe {
        env::remove_var("IG_SESSION_TEST_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("IG_SESSION_TEST_INT", " 42 ");
        env::remove_var("IG_SESSION_TEST_NONE");
    }
    assert_eq!(get_env_or_none::<u32>("IG_SESSION_TEST_INT"), Some(42));
    assert_eq!(get_env_or_none::<u32>("IG_SESSION_TEST_NONE"), None);
    unsafe {
        env::remove_var("IG_SESSION_TEST_INT");
    }
}
