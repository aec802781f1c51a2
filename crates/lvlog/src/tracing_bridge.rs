//! crates/lvlog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the level logger.
//!
//! [`LvlogLayer`] is a tracing-subscriber layer that turns tracing events
//! into level-logger lines. Libraries instrumented with `tracing::warn!` and
//! friends therefore end up on the same destination, with the same prefix
//! and threshold, as direct `lvlog` calls.
//!
//! | tracing | severity |
//! |---------|----------|
//! | TRACE, DEBUG | Debug |
//! | INFO | Info |
//! | WARN | Warning |
//! | ERROR | Error |
//!
//! ```rust,ignore
//! lvlog::init_level_and_file(0, "")?;
//! lvlog::init_tracing()?;
//!
//! tracing::warn!(peer = "10.0.0.7", "handshake timed out");
//! // 2024/05/01 12:00:00 net.rs:88: [WARNING] handshake timed out peer=10.0.0.7
//! ```

use std::fmt::{self, Write as _};

use lvlog_sink::CallSite;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::global;
use crate::logger::LevelLogger;
use crate::severity::Severity;

/// Maps a tracing level onto a severity.
#[must_use]
pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        Level::DEBUG | Level::TRACE => Severity::Debug,
    }
}

/// A tracing layer that writes events through a [`LevelLogger`].
pub struct LvlogLayer {
    logger: &'static LevelLogger,
}

impl LvlogLayer {
    /// Creates a layer writing through the process-wide logger.
    #[must_use]
    pub fn global() -> Self {
        Self::new(global::logger())
    }

    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: &'static LevelLogger) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for LvlogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // The threshold can change after a callsite is first seen, so interest
    // is never cached.
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger.enabled(severity_for(metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = severity_for(metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = CallSite::new(
            metadata.file().unwrap_or(metadata.target()),
            metadata.line().unwrap_or(0),
        );
        self.logger
            .log_at(severity, site, format_args!("{}", visitor.finish()));
    }
}

/// Collects the `message` field followed by every other field as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        if self.message.is_empty() {
            return self.fields;
        }
        if !self.fields.is_empty() {
            self.message.push(' ');
            self.message.push_str(&self.fields);
        }
        self.message
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value}", field.name());
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }
}

/// Installs a registry with [`LvlogLayer::global`] as the global default
/// subscriber.
///
/// Fails if another global subscriber has already been set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LvlogLayer::global())
        .try_init()
}
