use super::*;
use serde_json::json;

#[test]
fn full_spec_decodes() {
    let spec = BootstrapSpec::from_json(
        r#"{
            "users": [{"name": "app", "passwd": "secret"}],
            "databases": [{"name": "orders", "options": {"replicationFactor": 3}}],
            "collections": [{"database": "orders", "name": "lines", "attributes": {"waitForSync": true}}],
            "grants": [
                {"user": "app", "database": "orders"},
                {"user": "app", "database": "orders", "collection": "lines", "access": "ro"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(spec.users.len(), 1);
    assert_eq!(spec.databases[0].options, json!({"replicationFactor": 3}));
    assert_eq!(spec.collections[0].database, "orders");
    assert_eq!(spec.grants[0].collection, None);
    assert_eq!(spec.grants[1].collection.as_deref(), Some("lines"));
    assert_eq!(spec.grants[1].access, "ro");
}

#[test]
fn empty_document_is_an_empty_spec() {
    let spec = BootstrapSpec::from_json("{}").unwrap();
    assert_eq!(spec, BootstrapSpec::default());
}

#[test]
fn user_defaults_to_active_with_empty_password() {
    let spec = BootstrapSpec::from_json(r#"{"users": [{"name": "app"}]}"#).unwrap();
    assert!(spec.users[0].active);
    assert_eq!(spec.users[0].passwd, "");
}

#[test]
fn grant_access_defaults_to_read_write() {
    let spec =
        BootstrapSpec::from_json(r#"{"grants": [{"user": "app", "database": "orders"}]}"#)
            .unwrap();
    assert_eq!(spec.grants[0].access, "rw");
}

#[test]
fn creation_options_pass_through_verbatim() {
    let spec = BootstrapSpec::from_json(
        r#"{"collections": [{"database": "d", "name": "c", "attributes": {"type": 3, "keyOptions": {"type": "uuid"}}}]}"#,
    )
    .unwrap();
    assert_eq!(
        spec.collections[0].attributes,
        json!({"type": 3, "keyOptions": {"type": "uuid"}})
    );
}

#[test]
fn malformed_document_is_an_error() {
    assert!(BootstrapSpec::from_json("{not json").is_err());
}
