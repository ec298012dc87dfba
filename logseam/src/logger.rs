use std::fmt;
use std::sync::Arc;

use crate::{Entry, FieldValue, Key, Level, SharedSink, Sink};

/// A handle binding log calls to one [`Sink`].
///
/// The sink is fixed at construction and shared by every [`Entry`] the
/// logger produces. Cloning is cheap and shares the sink.
///
/// For the ambient, process-wide handle see the [`global`](crate::global)
/// module.
#[derive(Clone)]
pub struct Logger {
    sink: SharedSink,
}

impl Logger {
    /// Wrap the given sink. Always succeeds.
    pub fn new<S>(sink: S) -> Self
    where
        S: Sink + Send + Sync + 'static,
    {
        Logger {
            sink: Arc::new(sink),
        }
    }

    /// Wrap an already shared sink without another allocation.
    pub fn from_shared(sink: SharedSink) -> Self {
        Logger { sink }
    }

    /// The sink this logger dispatches to.
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Start an [`Entry`] carrying the given field, bound to this
    /// logger's sink. The logger itself is not modified.
    pub fn with_field(&self, key: impl Into<Key>, value: impl Into<FieldValue>) -> Entry {
        Entry::bound(self.sink.clone()).with_field(key, value)
    }

    /// Start an [`Entry`] carrying the given fields, bound to this
    /// logger's sink. The logger itself is not modified.
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<FieldValue>,
    {
        Entry::bound(self.sink.clone()).with_fields(fields)
    }

    /// Emit a record with no fields at the given level.
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        self.sink.emit(level, message.as_ref(), None);
    }

    /// Emit a debug-level record with no fields.
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message)
    }

    /// Emit an info-level record with no fields.
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message)
    }

    /// Emit a warn-level record with no fields.
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warn, message)
    }

    /// Emit an error-level record with no fields.
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message)
    }

    /// Emit a fatal-level record with no fields.
    ///
    /// Whether this terminates the process is up to the backend; see
    /// [`Level::Fatal`].
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(Level::Fatal, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger")
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::CaptureSink;
    use crate::{FieldValue, Level, Logger};

    #[test]
    fn level_methods_emit_once_without_fields() {
        let sink = CaptureSink::new();
        let logger = Logger::new(sink.clone());

        logger.info("ready");

        let records = sink.captured();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "ready");
        assert!(records[0].fields.is_none());
    }

    #[test]
    fn entries_inherit_the_logger_sink() {
        let sink = CaptureSink::new();
        let logger = Logger::new(sink.clone());

        logger.with_field("k", 1).error("m");

        let records = sink.captured();
        assert_eq!(records.len(), 1);
        let fields = records[0].fields.as_ref().expect("fields attached");
        assert_eq!(fields.get("k"), Some(&FieldValue::I64(1)));
    }

    #[test]
    fn clones_share_the_sink() {
        let sink = CaptureSink::new();
        let logger = Logger::new(sink.clone());

        logger.clone().warn("from clone");
        logger.warn("from original");

        assert_eq!(sink.captured().len(), 2);
    }
}
