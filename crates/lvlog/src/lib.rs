#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lvlog` is a small leveled-logging facade. Messages carry one of four
//! ordered [`Severity`] values; anything below the configured threshold is
//! dropped before formatting, everything else is written as one timestamped
//! line to standard error or to an existing log file.
//!
//! # Design
//!
//! [`LevelLogger`] holds the threshold and the destination. Programs usually
//! talk to the process-wide instance returned by [`logger`], configured once
//! at startup through [`init_from_args`] or [`init_level_and_file`] and then
//! used through the macros ([`info!`], [`warningf!`], [`fatalf!`], ...).
//! Libraries and tests that want isolation construct their own
//! [`LevelLogger`] and call its methods directly.
//!
//! Each severity has two write forms: the `*f` form takes a format string
//! (`infof!("{} files", n)`), the plain form joins its arguments
//! (`info!("copied ", n, " files")`). Joining writes operands back to back
//! and puts a space between two neighbours only when neither is a string,
//! so `info!(1, 2, 3.5)` writes `1 2 3.5`. Method and free-function callers
//! build the operand list with [`operands!`].
//!
//! # Timestamps
//!
//! Lines are stamped in local time. The local UTC offset is read once, when
//! the first [`LevelLogger`] is constructed (the process-wide one is built
//! on the first call to [`logger`] or an init function), and reused for
//! every line after that. On Unix the offset can only be read safely while
//! the process is single-threaded. A logger first constructed after other
//! threads exist therefore stamps every line in UTC, and a change of local
//! offset after capture (daylight saving) is not followed. Initialize
//! logging at the top of `main` to get local time.
//!
//! # Invariants
//!
//! - A write at severity `S` is emitted iff `S >= threshold`.
//! - The threshold is always one of the four severities; numeric levels
//!   outside `0..=3` are rejected, never clamped.
//! - Fatal writes are always emitted and never return.
//!
//! # Errors
//!
//! Only initialization fails, with [`LogError`]. Write operations swallow
//! I/O errors from the destination.
//!
//! # Examples
//!
//! ```
//! use lvlog::{LevelLogger, Severity};
//! use lvlog_sink::CaptureBuffer;
//!
//! let capture = CaptureBuffer::new();
//! let logger = LevelLogger::with_writer(Severity::Info, capture.clone());
//!
//! logger.debugf(format_args!("not shown"));
//! logger.info(&lvlog::operands!["listening on port ", 8080]);
//!
//! let output = capture.contents();
//! assert_eq!(output.lines().count(), 1);
//! assert!(output.ends_with("[INFO] listening on port 8080\n"));
//! ```
//!
//! # See also
//!
//! - `lvlog-sink` for the destination and line layout.
//! - [`LogArgs`] for the `--log-level` / `--log-file` flags.

mod config;
mod error;
mod global;
mod logger;
mod macros;
mod operand;
mod severity;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LogArgs;
pub use error::LogError;
pub use global::{
    debug, debugf, error, errorf, fatal, fatalf, info, infof, init_from_args,
    init_level_and_file, logger, warning, warningf,
};
pub use logger::{ExitHook, FATAL_EXIT_CODE, LevelLogger};
pub use operand::Operand;
#[doc(hidden)]
pub use operand::classify as __operand;
pub use severity::Severity;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LvlogLayer, init_tracing, severity_for};
