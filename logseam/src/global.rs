//! The process-wide default sink.
//!
//! The global sink **lets call sites log without threading a
//! [`Logger`] through every function signature**. Applications install
//! their sink of choice once at startup; library code logs through the
//! free functions here without constraining users to a specific backend.
//!
//! ## Usage in applications
//!
//! Applications configure the default by calling [`init`] when they
//! start:
//!
//! ```
//! use logseam::global;
//!
//! fn setup_logging() {
//!     // Swap this closure for a real backend bridge.
//!     let sink = logseam::sink_fn(|level, message, _fields| {
//!         eprintln!("{level:5} {message}");
//!     });
//!     global::init(sink);
//! }
//!
//! fn do_something_logged() {
//!     global::info("starting work");
//!     global::with_field("attempt", 2).warn("retrying");
//! }
//!
//! // in main or other app start
//! setup_logging();
//! do_something_logged();
//! # global::reset();
//! ```
//!
//! ## Usage in libraries
//!
//! Library code logs through the free functions directly; before the
//! application installs a sink every call is a safe no-op:
//!
//! ```
//! pub fn my_logged_library_function() {
//!     // End users of your library configure the sink; nothing happens
//!     // until they do.
//!     logseam::global::debug("doing library work");
//! }
//! # my_logged_library_function();
//! ```

use std::mem;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::{Entry, FieldValue, Key, Level, Logger, NoopSink, SharedSink, Sink};

static GLOBAL_SINK: Lazy<RwLock<SharedSink>> =
    Lazy::new(|| RwLock::new(Arc::new(NoopSink::new())));

/// Install `sink` as the process-wide default, returning the sink that
/// was previously installed.
///
/// May be called any number of times; each call replaces the previous
/// sink for all subsequent log calls. The swap is atomic with respect to
/// concurrent readers: every in-flight log call sees entirely the old
/// sink or entirely the new one, never a mix.
pub fn init<S>(sink: S) -> SharedSink
where
    S: Sink + Send + Sync + 'static,
{
    set_sink(Arc::new(sink))
}

/// Install an already shared sink as the process-wide default, returning
/// the sink that was previously installed.
pub fn set_sink(sink: SharedSink) -> SharedSink {
    let previous = {
        let mut global = GLOBAL_SINK.write().expect("GLOBAL_SINK RwLock poisoned");
        mem::replace(&mut *global, sink)
    };

    #[cfg(feature = "internal-logs")]
    tracing::debug!(target: "logseam", "global sink replaced");

    previous
}

/// A snapshot of the currently installed default sink.
pub fn sink() -> SharedSink {
    GLOBAL_SINK
        .read()
        .expect("GLOBAL_SINK RwLock poisoned")
        .clone()
}

/// Restore the no-op default, returning the sink that was installed.
pub fn reset() -> SharedSink {
    set_sink(Arc::new(NoopSink::new()))
}

/// A [`Logger`] bound to the currently installed default sink.
///
/// The returned handle keeps that sink even if the default is replaced
/// afterwards.
pub fn logger() -> Logger {
    Logger::from_shared(sink())
}

/// Start an [`Entry`] carrying the given field, bound to the currently
/// installed default sink.
pub fn with_field(key: impl Into<Key>, value: impl Into<FieldValue>) -> Entry {
    Entry::bound(sink()).with_field(key, value)
}

/// Start an [`Entry`] carrying the given fields, bound to the currently
/// installed default sink.
pub fn with_fields<I, K, V>(fields: I) -> Entry
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Key>,
    V: Into<FieldValue>,
{
    Entry::bound(sink()).with_fields(fields)
}

/// Emit a record with no fields through the default sink.
pub fn log(level: Level, message: impl AsRef<str>) {
    sink().emit(level, message.as_ref(), None);
}

/// Emit a debug-level record through the default sink.
pub fn debug(message: impl AsRef<str>) {
    log(Level::Debug, message)
}

/// Emit an info-level record through the default sink.
pub fn info(message: impl AsRef<str>) {
    log(Level::Info, message)
}

/// Emit a warn-level record through the default sink.
pub fn warn(message: impl AsRef<str>) {
    log(Level::Warn, message)
}

/// Emit an error-level record through the default sink.
pub fn error(message: impl AsRef<str>) {
    log(Level::Error, message)
}

/// Emit a fatal-level record through the default sink.
///
/// Whether this terminates the process is up to the backend; see
/// [`Level::Fatal`].
pub fn fatal(message: impl AsRef<str>) {
    log(Level::Fatal, message)
}
