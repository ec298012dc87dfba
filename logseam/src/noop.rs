use crate::{FieldSet, Level, Sink};

/// A sink that accepts every record and does nothing.
///
/// This is the behavior behind the process-wide default before
/// [`global::init`] is called, so logging through an uninitialized facade
/// never faults.
///
/// [`global::init`]: crate::global::init
#[derive(Clone, Debug, Default)]
pub struct NoopSink(());

impl NoopSink {
    /// Create a new no-op sink.
    pub fn new() -> Self {
        NoopSink(())
    }
}

impl Sink for NoopSink {
    fn emit(&self, _level: Level, _message: &str, _fields: Option<&FieldSet>) {}
}
