//! A minimal structured-logging facade.
//!
//! # Overview
//!
//! `logseam` defines the *shape* of a log record (an ordered severity
//! [`Level`], a message string, and a keyed [`FieldSet`]) and a single
//! one-method [`Sink`] through which every record leaves the facade.
//! Everything else is plumbing around that seam:
//!
//! - [`Logger`] binds a sink and offers per-level methods.
//! - [`Entry`] accumulates fields through a chainable builder before
//!   dispatching at a chosen level.
//! - [`global`] holds the process-wide default sink, replaceable at any
//!   time with an atomic swap and safe to use before initialization (the
//!   default is [`NoopSink`]).
//! - The `debugf!`..`fatalf!` macros are the `format!`-style variants of
//!   the level calls.
//!
//! This crate is a facade only: it never writes, formats, rotates,
//! buffers, or fans out records. Backends are attached by handing a sink
//! to [`Logger::new`] or [`global::init`]; bridge crates translate the
//! record shape into concrete backend call conventions:
//!
//! - **`logseam-bridge-log`** forwards to the
//!   [log](https://crates.io/crates/log) crate using its structured
//!   key-value support.
//! - **`logseam-bridge-otel`** forwards to the
//!   [OpenTelemetry Logs Bridge API](https://crates.io/crates/opentelemetry).
//!
//! # Getting started
//!
//! ```
//! use logseam::{fields, global, infof};
//!
//! // An application installs one sink at startup. Any closure of the
//! // right shape works; real programs hand over a backend bridge.
//! let sink = logseam::sink_fn(|level, message, fields| {
//!     match fields {
//!         Some(fields) => eprintln!("{level:5} {message} {fields:?}"),
//!         None => eprintln!("{level:5} {message}"),
//!     }
//! });
//! global::init(sink);
//!
//! // Call sites log through the default without further setup.
//! global::info("service starting");
//! global::with_field("port", 8080).info("listening");
//! global::with_fields(fields! { "peer" => "10.0.0.7", "tls" => true })
//!     .warn("handshake slow");
//! infof!("worker {} ready", 3);
//! # global::reset();
//! ```
//!
//! Explicit handles work the same way without touching process state:
//!
//! ```
//! use logseam::{Logger, NoopSink};
//!
//! let logger = Logger::new(NoopSink::new());
//! logger.with_field("request_id", "1f3a").debug("accepted");
//! ```
//!
//! # Feature flags
//!
//! - `internal-logs` (default): emit a `tracing` event when the global
//!   sink is replaced.
//! - `with-serde`: `serde::Serialize` impls for the field model.
//! - `testing`: the [`testing`] module with an in-memory capture sink.
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

pub mod global;

mod common;

pub use common::{FieldSet, FieldValue, Key, StringValue};

mod severity;

pub use severity::Level;

mod sink;

pub use sink::{sink_fn, SharedSink, Sink};

mod noop;

pub use noop::NoopSink;

mod logger;

pub use logger::Logger;

mod entry;

pub use entry::Entry;

mod macros;

#[cfg(feature = "with-serde")]
mod serde;

#[cfg(any(feature = "testing", test))]
pub mod testing;
