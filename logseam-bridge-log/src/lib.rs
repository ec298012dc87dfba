//! A [`logseam`] sink forwarding records to the [`log`] crate.
//!
//! The caller owns and configures the backing [`log::Log`]
//! implementation; this crate only translates record shapes. Fields are
//! attached through `log`'s structured key-value support, one pair per
//! field.
//!
//! ```no_run
//! # struct StderrLog;
//! # impl log::Log for StderrLog {
//! #     fn enabled(&self, _: &log::Metadata<'_>) -> bool { true }
//! #     fn log(&self, record: &log::Record<'_>) { eprintln!("{record:?}"); }
//! #     fn flush(&self) {}
//! # }
//! use logseam::global;
//! use logseam_bridge_log::LogBridge;
//!
//! let backend = StderrLog; // any `log::Log` implementation
//! global::init(LogBridge::new(backend));
//! global::with_field("port", 8080).info("listening");
//! ```

#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(test, deny(warnings))]

use log::kv;
use logseam::{FieldSet, FieldValue, Level, Sink};

const TARGET: &str = env!("CARGO_PKG_NAME");

/// Forwards facade records to a [`log::Log`] implementation.
///
/// `log` has no panic-class level, so [`Level::Fatal`] is delivered at
/// [`log::Level::Error`], the most severe level the backend offers.
pub struct LogBridge<L>
where
    L: log::Log,
{
    logger: L,
}

impl<L> LogBridge<L>
where
    L: log::Log,
{
    /// Wrap the given backend logger.
    pub fn new(logger: L) -> Self {
        LogBridge { logger }
    }
}

impl<L> std::fmt::Debug for LogBridge<L>
where
    L: log::Log,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LogBridge")
    }
}

impl<L> Sink for LogBridge<L>
where
    L: log::Log,
{
    fn emit(&self, level: Level, message: &str, fields: Option<&FieldSet>) {
        let level = log_level(level);
        if !self
            .logger
            .enabled(&log::Metadata::builder().level(level).target(TARGET).build())
        {
            return;
        }

        match fields {
            Some(fields) if !fields.is_empty() => {
                let source = FieldSource(fields);
                self.logger.log(
                    &log::Record::builder()
                        .level(level)
                        .target(TARGET)
                        .args(format_args!("{message}"))
                        .key_values(&source)
                        .build(),
                );
            }
            _ => {
                self.logger.log(
                    &log::Record::builder()
                        .level(level)
                        .target(TARGET)
                        .args(format_args!("{message}"))
                        .build(),
                );
            }
        }
    }
}

fn log_level(level: Level) -> log::Level {
    match level {
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error => log::Level::Error,
        // No panic-class level exists; deliver at the most severe one.
        Level::Fatal => log::Level::Error,
    }
}

struct FieldSource<'a>(&'a FieldSet);

impl kv::Source for FieldSource<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn kv::VisitSource<'kvs>) -> Result<(), kv::Error> {
        for (key, value) in self.0.iter() {
            visitor.visit_pair(kv::Key::from_str(key.as_str()), kv_value(value))?;
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.0.len()
    }
}

fn kv_value<'v>(value: &'v FieldValue) -> kv::Value<'v> {
    match value {
        FieldValue::Bool(v) => kv::Value::from(*v),
        FieldValue::I64(v) => kv::Value::from(*v),
        FieldValue::F64(v) => kv::Value::from(*v),
        FieldValue::String(v) => kv::Value::from(v.as_str()),
        value => kv::Value::from_debug(value),
    }
}
