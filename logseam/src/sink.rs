use std::sync::Arc;

use crate::{FieldSet, Level};

/// The single extension point of the facade.
///
/// A sink receives one finished log record and disposes of it however the
/// backend wishes. Sinks are fire-and-forget: there is no return channel,
/// and a backend failure must be swallowed by the sink rather than
/// surfaced to the call site.
///
/// Any closure of the right shape is a sink; see [`sink_fn`].
pub trait Sink {
    /// Consume one log record.
    ///
    /// `fields` is `None` when the record carries no fields. An empty
    /// set, should one arrive, must be treated exactly like `None`.
    fn emit(&self, level: Level, message: &str, fields: Option<&FieldSet>);
}

/// A shared handle to a sink.
///
/// [`Logger`]s and [`Entry`]s hold their sink through this handle; the
/// backend resource behind it outlives both.
///
/// [`Logger`]: crate::Logger
/// [`Entry`]: crate::Entry
pub type SharedSink = Arc<dyn Sink + Send + Sync>;

impl<F> Sink for F
where
    F: Fn(Level, &str, Option<&FieldSet>),
{
    fn emit(&self, level: Level, message: &str, fields: Option<&FieldSet>) {
        self(level, message, fields)
    }
}

/// Adapt a closure into a [`Sink`].
///
/// A bare closure already implements [`Sink`], but its parameter types
/// must then be spelled out; passing it through this helper lets the
/// compiler infer them.
///
/// ```
/// let sink = logseam::sink_fn(|level, message, _fields| {
///     eprintln!("{level:5} {message}");
/// });
/// let logger = logseam::Logger::new(sink);
/// logger.info("ready");
/// ```
pub fn sink_fn<F>(f: F) -> F
where
    F: Fn(Level, &str, Option<&FieldSet>),
{
    f
}
