use super::*;
use crate::util::storage::MemoryStorage;

fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, body: String::new() }
}

#[test]
fn method_labels_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
}

#[test]
fn success_statuses_produce_no_error() {
    assert_eq!(status_error(200, String::new()), None);
    assert_eq!(status_error(204, String::new()), None);
}

#[test]
fn failure_statuses_keep_code_and_body() {
    assert_eq!(
        status_error(404, "missing".to_owned()),
        Some(ApiError::Status { status: 404, body: "missing".to_owned() })
    );
    assert!(status_error(302, String::new()).is_some());
}

#[test]
fn only_unauthorized_redirects_to_login() {
    let unauthorized = ApiError::Status { status: 401, body: String::new() };
    assert_eq!(redirect_target(&unauthorized, "/"), Some("/login".to_owned()));
    assert_eq!(redirect_target(&unauthorized, "/app"), Some("/app/login".to_owned()));

    let server = ApiError::Status { status: 500, body: String::new() };
    assert_eq!(redirect_target(&server, "/"), None);
    assert_eq!(redirect_target(&ApiError::Network("x".to_owned()), "/"), None);
}

#[test]
fn intercept_returns_error_unchanged() {
    let err = ApiError::Status { status: 500, body: "boom".to_owned() };
    assert_eq!(intercept(err.clone()), err);
}

// =============================================================
// 401 handling
// =============================================================

#[test]
fn unauthorized_clears_stored_user_and_redirects() {
    let storage = MemoryStorage::default().with_entry(STORAGE_KEY, r#"{"name":"Ada"}"#);
    let target = handle_unauthorized(&unauthorized(), &storage, "/", Some("/meetings"));
    assert_eq!(target, Some("/login".to_owned()));
    assert_eq!(storage.get(STORAGE_KEY), None);
}

#[test]
fn unauthorized_on_login_page_clears_without_redirect() {
    let storage = MemoryStorage::default().with_entry(STORAGE_KEY, r#"{"name":"Ada"}"#);
    assert_eq!(handle_unauthorized(&unauthorized(), &storage, "/app", Some("/app/login")), None);
    assert_eq!(handle_unauthorized(&unauthorized(), &storage, "/app", Some("/app/login/")), None);
    assert_eq!(storage.get(STORAGE_KEY), None);
}

#[test]
fn other_failures_keep_the_session() {
    let storage = MemoryStorage::default().with_entry(STORAGE_KEY, r#"{"name":"Ada"}"#);
    let server = ApiError::Status { status: 500, body: String::new() };
    assert_eq!(handle_unauthorized(&server, &storage, "/", Some("/")), None);
    assert!(storage.get(STORAGE_KEY).is_some());
}

#[test]
fn unknown_location_still_redirects() {
    let storage = MemoryStorage::default();
    assert_eq!(handle_unauthorized(&unauthorized(), &storage, "/", None), Some("/login".to_owned()));
}
