use super::*;
use serde_json::json;

// =============================================================
// api_error
// =============================================================

#[test]
fn envelope_fields_are_decoded() {
    let error = api_error(
        409,
        &json!({"error": true, "code": 409, "errorNum": 1702, "errorMessage": "duplicate user"}),
    );
    match error {
        DbError::Api {
            code,
            error_num,
            message,
        } => {
            assert_eq!(code, 409);
            assert_eq!(error_num, 1702);
            assert_eq!(message, "duplicate user");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn missing_envelope_falls_back_to_http_status() {
    let error = api_error(502, &serde_json::Value::Null);
    match error {
        DbError::Api {
            code,
            error_num,
            message,
        } => {
            assert_eq!(code, 502);
            assert_eq!(error_num, 0);
            assert_eq!(message, "HTTP 502");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn api_error_display_names_code_and_error_num() {
    let error = api_error(409, &json!({"errorNum": 1207, "errorMessage": "duplicate name"}));
    assert_eq!(
        error.to_string(),
        "server returned 409 (errorNum 1207): duplicate name"
    );
}

// =============================================================
// DbClient::new
// =============================================================

#[test]
fn http_and_https_urls_are_accepted() {
    assert!(DbClient::new("http://127.0.0.1:8529", "root", "").is_ok());
    assert!(DbClient::new("https://db.example.com/", "root", "pw").is_ok());
}

#[test]
fn other_schemes_are_rejected() {
    let error = DbClient::new("tcp://127.0.0.1:8529", "root", "");
    assert!(matches!(error, Err(DbError::InvalidBaseUrl(_))));
}
