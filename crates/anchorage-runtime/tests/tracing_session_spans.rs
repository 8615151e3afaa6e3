#![forbid(unsafe_code)]

//! Tracing span and event checks for the position session.
//!
//! Verifies the spans emitted across a session lifetime, their parent-child
//! relationships, and the fields recorded on recompute events.
//!
//! Run:
//!   cargo test -p anchorage-runtime --test tracing_session_spans

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anchorage_core::{PlacementOptions, Rect, Size};
use anchorage_runtime::{PositionSession, SessionHost, ViewportEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use web_time::Instant;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
    parent_span_name: Option<String>,
}

/// A tracing Layer that captures span metadata, events, and parent info.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans().into_iter().filter(|s| s.name == name).collect()
    }

    fn events_with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message == message)
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for SpanCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|pid| ctx.span(pid))
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);

        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.get("message").cloned().unwrap_or_default();

        let parent_span_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
            parent_span_name,
        });
    }
}

fn with_captured_spans<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

// ============================================================================
// Fixtures
// ============================================================================

struct FixedHost {
    trigger: Option<Rect>,
}

impl SessionHost for FixedHost {
    fn trigger_rect(&self) -> Option<Rect> {
        self.trigger
    }

    fn viewport(&self) -> Size {
        Size::new(1024.0, 768.0)
    }
}

fn near_bottom() -> FixedHost {
    FixedHost {
        trigger: Some(Rect::from_edges(700.0, 100.0, 200.0, 730.0)),
    }
}

fn panel() -> Size {
    Size::new(256.0, 400.0)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn activate_span_records_request() {
    let handle = with_captured_spans(|| {
        let mut session = PositionSession::new();
        session.activate(near_bottom(), panel(), PlacementOptions::default());
    });

    let spans = handle.spans_named("position_session.activate");
    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(span.parent_name, None);
    assert_eq!(span.fields.get("preferred").map(String::as_str), Some("bottom-start"));
    assert_eq!(span.fields.get("width").map(String::as_str), Some("256"));
    assert_eq!(span.fields.get("height").map(String::as_str), Some("400"));
}

#[test]
fn initial_recompute_is_nested_under_activate() {
    let handle = with_captured_spans(|| {
        let mut session = PositionSession::new();
        session.activate(near_bottom(), panel(), PlacementOptions::default());
    });

    let recomputes = handle.spans_named("position_session.recompute");
    assert_eq!(recomputes.len(), 1);
    assert_eq!(
        recomputes[0].parent_name.as_deref(),
        Some("position_session.activate")
    );
}

#[test]
fn resolved_event_reports_flip() {
    let handle = with_captured_spans(|| {
        let mut session = PositionSession::new();
        session.activate(near_bottom(), panel(), PlacementOptions::default());
    });

    let events = handle.events_with_message("position resolved");
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, tracing::Level::DEBUG);
    assert_eq!(
        event.parent_span_name.as_deref(),
        Some("position_session.recompute")
    );
    assert_eq!(event.fields.get("placement").map(String::as_str), Some("top-start"));
    assert_eq!(event.fields.get("flipped").map(String::as_str), Some("true"));
    assert_eq!(event.fields.get("top").map(String::as_str), Some("296"));
    assert_eq!(event.fields.get("left").map(String::as_str), Some("100"));
}

#[test]
fn throttled_recompute_is_a_root_span() {
    let handle = with_captured_spans(|| {
        let mut session = PositionSession::new();
        session.activate(near_bottom(), panel(), PlacementOptions::default());
        let t0 = Instant::now();
        session.notify(ViewportEvent::Scroll, t0);
        session.notify(ViewportEvent::Scroll, t0 + Duration::from_millis(2));
        session.tick(t0 + Duration::from_millis(40));
    });

    let recomputes = handle.spans_named("position_session.recompute");
    assert_eq!(recomputes.len(), 2);
    assert_eq!(recomputes[1].parent_name, None);
    assert_eq!(handle.events_with_message("recompute scheduled").len(), 2);
}

#[test]
fn missing_trigger_logs_and_skips_recompute() {
    let handle = with_captured_spans(|| {
        let mut session = PositionSession::new();
        session.activate(FixedHost { trigger: None }, panel(), PlacementOptions::default());
    });

    assert!(handle.spans_named("position_session.recompute").is_empty());
    let events = handle.events_with_message("trigger not attached; session unchanged");
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].parent_span_name.as_deref(),
        Some("position_session.activate")
    );
}

#[test]
fn deactivate_logs_recompute_count() {
    let handle = with_captured_spans(|| {
        let mut session = PositionSession::new();
        session.activate(near_bottom(), panel(), PlacementOptions::default());
        session.refresh();
        session.deactivate();
    });

    let events = handle.events_with_message("position session deactivated");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields.get("recomputes").map(String::as_str), Some("2"));
}

#[test]
fn drop_of_active_session_deactivates() {
    let handle = with_captured_spans(|| {
        let mut session = PositionSession::new();
        session.activate(near_bottom(), panel(), PlacementOptions::default());
        drop(session);
    });

    assert_eq!(
        handle.events_with_message("position session deactivated").len(),
        1
    );
}
