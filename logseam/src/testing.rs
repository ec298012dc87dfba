//! In-memory test instrumentation for sink consumers.

use std::sync::{Arc, Mutex};

use crate::{FieldSet, Level, Sink};

/// A sink that records every emission in memory.
///
/// Useful for asserting on what a logger or entry dispatched. Clones
/// share the same buffer.
///
/// # Example
///
/// ```
/// use logseam::testing::CaptureSink;
/// use logseam::{Level, Logger};
///
/// let sink = CaptureSink::new();
/// let logger = Logger::new(sink.clone());
/// logger.info("ready");
///
/// let records = sink.captured();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level, Level::Info);
/// assert_eq!(records[0].message, "ready");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

/// One record received by a [`CaptureSink`].
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedRecord {
    /// Severity the record was emitted at.
    pub level: Level,
    /// The message, exactly as it reached the sink.
    pub message: String,
    /// The fields, `None` when the record carried none.
    pub fields: Option<FieldSet>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        CaptureSink::default()
    }

    /// Everything captured so far, in emission order.
    pub fn captured(&self) -> Vec<CapturedRecord> {
        self.records
            .lock()
            .expect("CaptureSink buffer poisoned")
            .clone()
    }

    /// Clear the captured records.
    pub fn reset(&self) {
        self.records
            .lock()
            .expect("CaptureSink buffer poisoned")
            .clear();
    }
}

impl Sink for CaptureSink {
    fn emit(&self, level: Level, message: &str, fields: Option<&FieldSet>) {
        self.records
            .lock()
            .expect("CaptureSink buffer poisoned")
            .push(CapturedRecord {
                level,
                message: message.to_owned(),
                fields: fields.cloned(),
            });
    }
}
