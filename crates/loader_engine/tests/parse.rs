use loader_engine::{parse_document, FailureKind};
use serde_json::json;

#[test]
fn parses_objects_and_arrays() {
    assert_eq!(parse_document(br#"{"a":1}"#).unwrap(), json!({"a": 1}));
    assert_eq!(
        parse_document(br#"[{"id":1},{"id":2}]"#).unwrap(),
        json!([{"id": 1}, {"id": 2}])
    );
}

#[test]
fn skips_utf8_bom() {
    let body = b"\xEF\xBB\xBF{\"a\":1}";
    assert_eq!(parse_document(body).unwrap(), json!({"a": 1}));
}

#[test]
fn rejects_non_json_body() {
    let err = parse_document(b"not found").unwrap_err();
    assert_eq!(err.kind, FailureKind::Parse);
}

#[test]
fn rejects_empty_body() {
    let err = parse_document(b"").unwrap_err();
    assert_eq!(err.kind, FailureKind::Parse);
}

#[test]
fn rejects_trailing_garbage() {
    let err = parse_document(br#"{"a":1} trailing"#).unwrap_err();
    assert_eq!(err.kind, FailureKind::Parse);
}
