//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used in `MalformedResponse` hints.
//! Invariants: Category mapping remains deterministic for representative messages.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[path = "../src/json/parse.rs"]
mod parse;

use parse::ParseFailureCategory;
use serde_json::Value;

#[test]
fn category_mapping_handles_representative_messages() {
    let cases = [
        ("Syntax at character 5 ('}')", ParseFailureCategory::Syntax),
        ("ExpectedObjectKey at character 1", ParseFailureCategory::Syntax),
        ("InvalidUtf8 at character 0", ParseFailureCategory::Utf8),
        ("InvalidNumber at character 5", ParseFailureCategory::NumericRange),
        ("number overflow", ParseFailureCategory::NumericRange),
        (
            "recursion limit exceeded while parsing",
            ParseFailureCategory::DepthLimit,
        ),
    ];
    for (message, expected) in cases {
        assert_eq!(parse::categorize_message(message), expected, "{message}");
    }
}

#[test]
fn truncated_payload_is_categorized() {
    let err = parse::from_str::<Value>(r#"{"id":"1","values":["#).unwrap_err();
    assert_ne!(parse::categorize_error(&err), ParseFailureCategory::Unknown);
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_str::<Value>(r#"{"data":}"#).unwrap_err();
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: "));
    assert!(hint.contains("context: test.context"));
}

#[test]
fn unknown_category_fallback_is_stable() {
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
    assert_eq!(ParseFailureCategory::Unknown.label(), "unknown");
}

#[test]
fn nesting_beyond_limit_is_depth_limited() {
    let deep = format!("{}{}", "[".repeat(parse::MAX_DEPTH + 1), "]".repeat(parse::MAX_DEPTH + 1));
    let err = parse::from_str::<Value>(&deep).unwrap_err();
    assert_eq!(parse::categorize_error(&err), ParseFailureCategory::DepthLimit);
    assert!(parse::hint_for_error(&err, "body").contains("depth-limit"));

    let at_limit = format!("{}{}", "[".repeat(parse::MAX_DEPTH), "]".repeat(parse::MAX_DEPTH));
    assert!(parse::from_str::<Value>(&at_limit).is_ok());
}

#[test]
fn brackets_inside_strings_do_not_count_toward_depth() {
    let text = "[".repeat(parse::MAX_DEPTH * 2);
    let payload = format!(r#"{{"title":"{text}","quoted":"\"{{["}}"#);
    let value = parse::from_str::<Value>(&payload).unwrap();
    assert_eq!(value["title"].as_str(), Some(text.as_str()));
}
