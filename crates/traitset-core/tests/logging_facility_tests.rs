#![allow(clippy::unwrap_used, clippy::expect_used)]

use tracing::Level;
use traitset_core::logging_facility::test_capture::init_test_capture;
use traitset_core::traitset_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_MEMBER,
};
use traitset_core::{log_op_end, log_op_error, log_op_start, Member, Trait, TraitError, REQUIRED};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_records_code_and_member() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = TraitError::UnresolvedConflict {
        name: "greet".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_UNRESOLVED_CONFLICT"));
    assert_eq!(events[0].field(FIELD_MEMBER), Some("greet"));
}

#[test]
fn test_create_logs_start_and_end() {
    let capture = init_test_capture();

    Trait::new([("logged_member_ok", Member::value(1))])
        .create()
        .unwrap();

    capture.assert_event_exists("create", EVENT_START);
    capture.assert_event_exists("create", EVENT_END);
}

#[test]
fn test_failed_create_logs_end_error() {
    let capture = init_test_capture();

    let _ = Trait::new([("logged_member_missing", REQUIRED)]).create();

    let failures: Vec<_> = capture
        .events_for("create")
        .into_iter()
        .filter(|e| e.member.as_deref() == Some("logged_member_missing"))
        .collect();
    assert_eq!(failures.len(), 1);

    let failure = &failures[0];
    assert_eq!(failure.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(failure.level, Level::ERROR);
    assert_eq!(failure.component.as_deref(), Some("traitset_core::ops::create"));
    assert_eq!(failure.field(FIELD_ERR_CODE), Some("ERR_MISSING_REQUIRED"));
}

#[test]
fn test_algebra_operations_log_at_debug() {
    let capture = init_test_capture();

    let a = Trait::new([("debug_logged", Member::value(1))]);
    let _ = a.compose(&a).exclude(["debug_logged"]);

    assert!(!capture.events_for("compose").is_empty());
    assert!(!capture.events_for("exclude").is_empty());
}
