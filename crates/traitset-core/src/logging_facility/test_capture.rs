//! In-memory log capture for tests
//!
//! Records every event keyed by the schema fields, so a test can look up
//! what `create` (or a hand-written `log_op_*!` call) emitted for a given
//! operation or member.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::traitset_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_MEMBER, FIELD_OP};

/// One recorded event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    /// Member the event refers to, when it names one
    pub member: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: HashMap<String, String>) -> Self {
        Self {
            level,
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            member: fields.get(FIELD_MEMBER).cloned(),
            fields,
        }
    }

    /// Any recorded field, rendered as text
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

/// Renders every field value to text; strings stay unquoted
#[derive(Default)]
struct FieldRecorder(HashMap<String, String>);

impl FieldRecorder {
    fn put(&mut self, field: &Field, value: impl ToString) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl Visit for FieldRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value);
    }
}

type Sink = Arc<Mutex<Vec<CapturedEvent>>>;

/// Subscriber layer feeding a [`TestCapture`]
pub struct TestCaptureLayer {
    sink: Sink,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let sink = Sink::default();
        (
            Self { sink: sink.clone() },
            TestCapture { sink },
        )
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), recorder.0);

        if let Ok(mut events) = self.sink.lock() {
            events.push(captured);
        }
    }
}

/// Read side of the capture
#[derive(Clone)]
pub struct TestCapture {
    sink: Sink,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .collect()
    }

    /// # Panics
    ///
    /// When no event has this `op` and `event`
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "no {}/{} event among {} captured",
            op,
            event,
            events.len()
        );
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture as the global subscriber, once per process
///
/// Every test in the binary shares it; filter on a unique `op` or member.
///
/// # Example
///
/// ```
/// use traitset_core::logging_facility::test_capture::init_test_capture;
/// use traitset_core::{Member, Trait};
///
/// let capture = init_test_capture();
/// Trait::new([("doc_member", Member::value(1))]).create().unwrap();
/// capture.assert_event_exists("create", "end");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_fields_are_lifted() {
        let fields: HashMap<String, String> = [
            (FIELD_OP, "create"),
            (FIELD_EVENT, "end_error"),
            (FIELD_MEMBER, "greet"),
            ("err.code", "ERR_MISSING_REQUIRED"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let event = CapturedEvent::from_fields(Level::ERROR, fields);
        assert!(event.is("create", "end_error"));
        assert_eq!(event.member.as_deref(), Some("greet"));
        assert_eq!(event.component, None);
        assert_eq!(event.field("err.code"), Some("ERR_MISSING_REQUIRED"));
    }

    #[test]
    fn test_layer_records_into_its_capture() {
        let (layer, capture) = TestCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(op = "rename", member = "a", trait_len = 2u64, cleared = true);
        });

        let events = capture.events_for("rename");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::WARN);
        assert_eq!(events[0].member.as_deref(), Some("a"));
        assert_eq!(events[0].field("trait_len"), Some("2"));
        assert_eq!(events[0].field("cleared"), Some("true"));
        assert_eq!(capture.count_events(|e| e.event.is_none()), 1);
    }
}
