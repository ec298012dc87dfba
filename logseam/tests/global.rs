//! Behavior of the process-wide default sink.
//!
//! Every test here touches shared process state, so they serialize on one
//! lock and restore the no-op default before releasing it.

use std::sync::{Mutex, MutexGuard};

use logseam::testing::CaptureSink;
use logseam::{debugf, fields, global, infof, warnf, FieldValue, Level, Sink};

static GLOBAL_GUARD: Mutex<()> = Mutex::new(());

fn exclusive() -> MutexGuard<'static, ()> {
    GLOBAL_GUARD
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn init_routes_subsequent_calls_to_the_new_sink() {
    let _guard = exclusive();
    let sink_a = CaptureSink::new();
    let sink_b = CaptureSink::new();

    global::init(sink_a.clone());
    global::info("one");

    let records = sink_a.captured();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].message, "one");
    assert!(records[0].fields.is_none());

    global::init(sink_b.clone());
    global::error("two");

    // The first sink saw exactly one record; the replacement saw the rest.
    assert_eq!(sink_a.captured().len(), 1);
    let records = sink_b.captured();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "two");

    global::reset();
}

#[test]
fn init_returns_the_previous_sink() {
    let _guard = exclusive();
    let sink_a = CaptureSink::new();

    global::init(sink_a.clone());
    let previous = global::init(CaptureSink::new());

    // Emitting through the returned handle still reaches the first sink.
    previous.emit(Level::Debug, "late", None);
    assert_eq!(sink_a.captured().len(), 1);

    global::reset();
}

#[test]
fn reset_restores_noop_behavior() {
    let _guard = exclusive();
    let sink = CaptureSink::new();

    global::init(sink.clone());
    global::reset();
    global::warn("dropped");

    assert!(sink.captured().is_empty());
}

#[test]
fn formatted_variants_deliver_the_message_verbatim() {
    let _guard = exclusive();
    let sink = CaptureSink::new();
    global::init(sink.clone());

    infof!("x={}", 3);
    debugf!("y={:>4}", 7);
    warnf!(logger: global::logger(), "z={}", true);
    global::info("a b");

    let messages: Vec<String> = sink
        .captured()
        .into_iter()
        .map(|record| record.message)
        .collect();
    assert_eq!(messages, ["x=3", "y=   7", "z=true", "a b"]);

    global::reset();
}

#[test]
fn entries_keep_the_sink_they_were_created_against() {
    let _guard = exclusive();
    let sink_a = CaptureSink::new();
    let sink_b = CaptureSink::new();

    global::init(sink_a.clone());
    let entry = global::with_field("k", "v");

    global::init(sink_b.clone());
    entry.error("late dispatch");

    assert_eq!(sink_a.captured().len(), 1);
    assert!(sink_b.captured().is_empty());

    global::reset();
}

#[test]
fn global_entries_accumulate_fields() {
    let _guard = exclusive();
    let sink = CaptureSink::new();
    global::init(sink.clone());

    global::with_fields(fields! { "a" => "b" })
        .with_field("c", 3)
        .info("m");

    let records = sink.captured();
    let fields = records[0].fields.as_ref().expect("fields attached");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("a"), Some(&FieldValue::String("b".into())));
    assert_eq!(fields.get("c"), Some(&FieldValue::I64(3)));

    global::reset();
}
