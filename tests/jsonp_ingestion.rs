use rarefaction_summary::ingestion::jsonp::{load_jsonp_from_path, load_jsonp_from_str};
use rarefaction_summary::ingestion::JsonpExtraction;
use rarefaction_summary::processing::group_means;
use rarefaction_summary::RarefactionError;

#[test]
fn load_jsonp_from_path_happy_path() {
    let payload =
        load_jsonp_from_path("tests/fixtures/group_means.jsonp", JsonpExtraction::FirstBrace)
            .unwrap();
    assert_eq!(payload.data.len(), 4);
}

#[test]
fn record_mean_is_stored_under_group_and_depth() {
    let payload = load_jsonp_from_str(
        r#"cb({"data": [["GroupA", 5, 2, 4, 6, "meta"]]})"#,
        JsonpExtraction::FirstBrace,
    )
    .unwrap();
    let table = group_means(&payload).unwrap();
    assert_eq!(table.get("GroupA", "5"), Some(4.0));
}

#[test]
fn nested_payload_needs_balanced_extraction() {
    let err = load_jsonp_from_path("tests/fixtures/nested.jsonp", JsonpExtraction::FirstBrace)
        .unwrap_err();
    assert!(matches!(err, RarefactionError::Parse { .. }));

    let payload =
        load_jsonp_from_path("tests/fixtures/nested.jsonp", JsonpExtraction::Balanced).unwrap();
    assert_eq!(payload.data.len(), 1);
}

#[test]
fn invalid_json_after_unwrapping_is_parse_error() {
    let err = load_jsonp_from_str("cb({\"data\": [1, 2,]})", JsonpExtraction::FirstBrace)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("parse error"));
    assert!(msg.contains("invalid json payload"));
}
