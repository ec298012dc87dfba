//! A [`logseam`] sink forwarding records to the OpenTelemetry Logs
//! Bridge API.
//!
//! The caller builds and owns the backend [`Logger`] (usually through an
//! SDK `LoggerProvider`); this crate only translates record shapes. The
//! message becomes the record body, the level becomes both severity
//! number and severity text, and each field becomes one record
//! attribute.
//!
//! ```no_run
//! use logseam::global;
//! use logseam_bridge_otel::OpenTelemetryBridge;
//! use opentelemetry::logs::LoggerProvider;
//! use opentelemetry_sdk::logs::SdkLoggerProvider;
//!
//! let provider = SdkLoggerProvider::builder().build();
//! global::init(OpenTelemetryBridge::new(provider.logger("my-service")));
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

use logseam::{FieldSet, FieldValue, Key, Level, Sink};
use opentelemetry::logs::{AnyValue, LogRecord, Logger, Severity};

const TARGET: &str = env!("CARGO_PKG_NAME");

/// Forwards facade records to an OpenTelemetry [`Logger`].
///
/// [`Level::Fatal`] maps to [`Severity::Fatal`], the most severe value
/// the backend defines; whether anything terminates on it is decided
/// behind the backend, never here.
pub struct OpenTelemetryBridge<L>
where
    L: Logger,
{
    logger: L,
}

impl<L> OpenTelemetryBridge<L>
where
    L: Logger,
{
    /// Wrap the given backend logger.
    pub fn new(logger: L) -> Self {
        OpenTelemetryBridge { logger }
    }
}

impl<L> std::fmt::Debug for OpenTelemetryBridge<L>
where
    L: Logger,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OpenTelemetryBridge")
    }
}

impl<L> Sink for OpenTelemetryBridge<L>
where
    L: Logger,
{
    fn emit(&self, level: Level, message: &str, fields: Option<&FieldSet>) {
        let mut record = self.logger.create_log_record();
        record.set_target(TARGET);
        record.set_severity_number(severity(level));
        record.set_severity_text(level.name());
        record.set_body(AnyValue::String(message.to_owned().into()));
        if let Some(fields) = fields {
            for (key, value) in fields.iter() {
                record.add_attribute(attribute_key(key), attribute_value(value));
            }
        }
        self.logger.emit(record);
    }
}

fn severity(level: Level) -> Severity {
    match level {
        Level::Debug => Severity::Debug,
        Level::Info => Severity::Info,
        Level::Warn => Severity::Warn,
        Level::Error => Severity::Error,
        Level::Fatal => Severity::Fatal,
    }
}

fn attribute_key(key: &Key) -> opentelemetry::Key {
    opentelemetry::Key::new(key.as_str().to_owned())
}

fn attribute_value(value: &FieldValue) -> AnyValue {
    match value {
        FieldValue::Bool(v) => AnyValue::Boolean(*v),
        FieldValue::I64(v) => AnyValue::Int(*v),
        FieldValue::F64(v) => AnyValue::Double(*v),
        FieldValue::String(v) => AnyValue::String(v.as_str().to_owned().into()),
        FieldValue::Bytes(v) => AnyValue::Bytes(Box::new(v.clone())),
        FieldValue::List(values) => {
            AnyValue::ListAny(Box::new(values.iter().map(attribute_value).collect()))
        }
        FieldValue::Map(entries) => AnyValue::Map(Box::new(
            entries
                .iter()
                .map(|(key, value)| (attribute_key(key), attribute_value(value)))
                .collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use logseam::{fields, Logger as SeamLogger};
    use opentelemetry::logs::{AnyValue, LoggerProvider, Severity};
    use opentelemetry_sdk::logs::{InMemoryLogExporter, SdkLoggerProvider};

    use super::OpenTelemetryBridge;

    fn capture() -> (InMemoryLogExporter, SeamLogger) {
        let exporter = InMemoryLogExporter::default();
        let provider = SdkLoggerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        let logger = SeamLogger::new(OpenTelemetryBridge::new(provider.logger("test")));
        (exporter, logger)
    }

    #[test]
    fn forwards_severity_and_body() {
        let (exporter, logger) = capture();

        logger.info("ready");

        let logs = exporter.get_emitted_logs().expect("emitted logs");
        assert_eq!(logs.len(), 1);
        let record = &logs[0].record;
        assert_eq!(record.severity_number(), Some(Severity::Info));
        assert_eq!(record.severity_text(), Some("INFO"));
        assert_eq!(record.body(), Some(&AnyValue::String("ready".into())));
    }

    #[test]
    fn fatal_maps_to_the_most_severe_call() {
        let (exporter, logger) = capture();

        logger.fatal("going down");

        let logs = exporter.get_emitted_logs().expect("emitted logs");
        let record = &logs[0].record;
        assert_eq!(record.severity_number(), Some(Severity::Fatal));
        assert_eq!(record.severity_text(), Some("FATAL"));
    }

    #[test]
    fn level_mapping_is_total_and_order_preserving() {
        let (exporter, logger) = capture();

        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");
        logger.fatal("f");

        let severities: Vec<Severity> = exporter
            .get_emitted_logs()
            .expect("emitted logs")
            .iter()
            .map(|log| log.record.severity_number().expect("severity set"))
            .collect();
        assert_eq!(
            severities,
            [
                Severity::Debug,
                Severity::Info,
                Severity::Warn,
                Severity::Error,
                Severity::Fatal,
            ]
        );
        assert!(severities.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn fields_become_attributes_exactly_once_per_key() {
        let (exporter, logger) = capture();

        logger
            .with_fields(fields! { "a" => "b", "c" => 3, "d" => true })
            .warn("with fields");

        let logs = exporter.get_emitted_logs().expect("emitted logs");
        let mut attributes: Vec<(String, AnyValue)> = logs[0]
            .record
            .attributes_iter()
            .map(|(key, value)| (key.as_str().to_owned(), value.clone()))
            .collect();
        attributes.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(
            attributes,
            [
                ("a".to_owned(), AnyValue::String("b".into())),
                ("c".to_owned(), AnyValue::Int(3)),
                ("d".to_owned(), AnyValue::Boolean(true)),
            ]
        );
    }

    #[test]
    fn empty_field_sets_attach_no_attributes() {
        let (exporter, logger) = capture();

        logger.error("direct");
        logger.with_fields(fields!()).error("empty entry");

        for log in exporter.get_emitted_logs().expect("emitted logs") {
            assert_eq!(log.record.attributes_iter().count(), 0);
        }
    }

    #[test]
    fn nested_values_translate_recursively() {
        let (exporter, logger) = capture();

        logger
            .with_field(
                "nested",
                logseam::FieldValue::from_iter([("inner", true)]),
            )
            .info("m");

        let logs = exporter.get_emitted_logs().expect("emitted logs");
        let attributes: Vec<(String, AnyValue)> = logs[0]
            .record
            .attributes_iter()
            .map(|(key, value)| (key.as_str().to_owned(), value.clone()))
            .collect();
        assert_eq!(attributes.len(), 1);
        let (key, value) = &attributes[0];
        assert_eq!(key, "nested");
        match value {
            AnyValue::Map(entries) => {
                assert_eq!(
                    entries.get(&opentelemetry::Key::new("inner")),
                    Some(&AnyValue::Boolean(true))
                );
            }
            other => panic!("expected a map attribute, got {other:?}"),
        }
    }
}
