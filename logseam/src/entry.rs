use std::fmt;

use crate::{FieldSet, FieldValue, Key, Level, SharedSink};

/// A short-lived accumulator of fields for one pending log call.
///
/// Entries are created by [`Logger::with_field`]/[`Logger::with_fields`]
/// or their [`global`](crate::global) counterparts. Field calls consume
/// and return the entry so chains read left to right; the level methods
/// borrow, so an entry may be dispatched more than once.
///
/// An entry keeps the sink it was created against. Replacing the global
/// sink afterwards does not redirect an existing entry. Entries belong to
/// a single call site and carry no internal synchronization.
///
/// [`Logger::with_field`]: crate::Logger::with_field
/// [`Logger::with_fields`]: crate::Logger::with_fields
pub struct Entry {
    sink: SharedSink,
    fields: FieldSet,
}

impl Entry {
    pub(crate) fn bound(sink: SharedSink) -> Self {
        Entry {
            sink,
            fields: FieldSet::new(),
        }
    }

    /// Add one field, replacing any previous value under the same key.
    pub fn with_field(mut self, key: impl Into<Key>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Add every field from `fields`, replacing previous values under the
    /// same keys.
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<FieldValue>,
    {
        self.fields.extend(fields);
        self
    }

    /// The fields accumulated so far.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Emit the accumulated fields at the given level.
    ///
    /// An entry without fields produces the same sink invocation as the
    /// corresponding direct logger call.
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        let fields = if self.fields.is_empty() {
            None
        } else {
            Some(&self.fields)
        };
        self.sink.emit(level, message.as_ref(), fields);
    }

    /// Emit a debug-level record carrying the accumulated fields.
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message)
    }

    /// Emit an info-level record carrying the accumulated fields.
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message)
    }

    /// Emit a warn-level record carrying the accumulated fields.
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warn, message)
    }

    /// Emit an error-level record carrying the accumulated fields.
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message)
    }

    /// Emit a fatal-level record carrying the accumulated fields.
    ///
    /// Whether this terminates the process is up to the backend; see
    /// [`Level::Fatal`].
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(Level::Fatal, message)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("fields", &self.fields).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::testing::CaptureSink;
    use crate::{Entry, FieldValue, Level};

    fn capturing_entry() -> (CaptureSink, Entry) {
        let sink = CaptureSink::new();
        (sink.clone(), Entry::bound(Arc::new(sink)))
    }

    #[test]
    fn chained_fields_accumulate_exactly() {
        let (sink, entry) = capturing_entry();

        entry.with_field("k1", "v1").with_field("k2", 2).info("m");

        let records = sink.captured();
        assert_eq!(records.len(), 1);
        let fields = records[0].fields.as_ref().expect("fields attached");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("k1"), Some(&FieldValue::String("v1".into())));
        assert_eq!(fields.get("k2"), Some(&FieldValue::I64(2)));
    }

    #[test]
    fn repeated_key_keeps_the_last_value() {
        let (sink, entry) = capturing_entry();

        entry.with_field("k", 1).with_field("k", 2).warn("m");

        let fields = sink.captured()[0].fields.clone().expect("fields attached");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("k"), Some(&FieldValue::I64(2)));
    }

    #[test]
    fn with_fields_merges_with_last_write_wins() {
        let (sink, entry) = capturing_entry();

        entry
            .with_field("a", 1)
            .with_fields([("a", 10), ("b", 20)])
            .error("m");

        let fields = sink.captured()[0].fields.clone().expect("fields attached");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a"), Some(&FieldValue::I64(10)));
        assert_eq!(fields.get("b"), Some(&FieldValue::I64(20)));
    }

    #[test]
    fn entry_without_fields_emits_the_direct_call_shape() {
        let (sink, entry) = capturing_entry();

        entry.debug("bare");

        let records = sink.captured();
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[0].message, "bare");
        assert!(records[0].fields.is_none());
    }

    #[test]
    fn one_entry_can_dispatch_at_several_levels() {
        let (sink, entry) = capturing_entry();
        let entry = entry.with_field("k", true);

        entry.debug("first");
        entry.fatal("second");

        let records = sink.captured();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Debug);
        assert_eq!(records[1].level, Level::Fatal);
        assert_eq!(records[0].fields, records[1].fields);
    }
}
