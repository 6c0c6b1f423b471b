#![allow(clippy::unwrap_used, clippy::expect_used)]

use lmsteer_core::errors::SteerError;
use lmsteer_core::logging_facility::test_capture::init_test_capture;
use lmsteer_core::{
    log_op_end, log_op_error, log_op_start, resolve, Action, Leaf, Rule, RuleBook,
};
use lmsteer_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CAPTURE_COUNT, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_LEAF_COUNT, FIELD_MODEL_NAME, FIELD_RULE_COUNT,
    FIELD_RULE_ID,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    assert!(
        !capture.events_for(op_name, EVENT_START).is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SteerError::NodeNotFound {
        path: "h.9".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("NotFound"));
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, model_name = "gpt2", rule_count = 3);

    let start = capture
        .events_for(op_name, EVENT_START)
        .into_iter()
        .next()
        .expect("Should have start event");
    assert_eq!(start.field(FIELD_MODEL_NAME), Some("gpt2"));
    assert_eq!(start.field(FIELD_RULE_COUNT), Some("3"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_resolve_emits_one_start_and_one_end() {
    let capture = init_test_capture();
    // A leaf path unique to this test picks our events out of the shared buffer
    let leaves = vec![Leaf::new("logging_test_unique_leaf", "Linear")];
    let rules = vec![Rule::instance("logging_test_unique_leaf", Action::Capture)];

    resolve(&rules, &leaves).unwrap();

    let ends: Vec<_> = capture
        .events_for("resolve", EVENT_END)
        .into_iter()
        .filter(|e| {
            e.field(FIELD_CAPTURE_COUNT) == Some("1") && e.field("undecided_count") == Some("0")
        })
        .collect();
    assert!(!ends.is_empty());
    assert!(ends[0].component.as_deref().unwrap_or("").contains("rules"));

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("resolve")
            && e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_LEAF_COUNT) == Some("1")
            && e.field(FIELD_RULE_COUNT) == Some("1")
    });
    assert!(starts >= 1);
}

#[test]
fn test_rule_append_logs_rule_id() {
    let capture = init_test_capture();
    let rule = Rule::instance("logging_test_appended_leaf", Action::Capture);
    let id = rule.id().to_string();

    let mut book = RuleBook::new();
    book.push(rule);

    let logged = capture.count_events(|e| {
        e.field(FIELD_RULE_ID) == Some(id.as_str())
            && e.field("specifier") == Some("logging_test_appended_leaf")
    });
    assert_eq!(logged, 1);
}

#[test]
fn test_resolve_failure_emits_end_error() {
    let capture = init_test_capture();
    let leaves = vec![Leaf::new("no_type_here", "")];

    let result = resolve(&[], &leaves);
    assert!(result.is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("resolve")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_MISSING_TYPE_TAG")
    });
    assert!(errors >= 1);
}
