//! crates/lvlog/src/logger.rs
//! The level logger: threshold gating, destination binding and fatal exits.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::process;
use std::sync::atomic::{AtomicU8, Ordering};

use lvlog_sink::{CallSite, Destination, LineSink};

use crate::config::LogArgs;
use crate::error::LogError;
use crate::operand::{Joined, Operand};
use crate::severity::Severity;

/// Exit status used by fatal writes and by an invalid `--log-level`.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Termination hook invoked by fatal operations.
///
/// The default is [`std::process::exit`]. Tests substitute a hook that
/// panics so the divergence can be observed in-process.
pub type ExitHook = fn(i32) -> !;

/// Leveled logger with a severity threshold and a single destination.
///
/// A fresh logger has an [`Info`](Severity::Info) threshold and writes to
/// standard error. The threshold is held in an atomic and the destination
/// behind the [`LineSink`] lock, so a logger can be shared freely across
/// threads; configuration is nonetheless expected to happen once, before
/// concurrent logging starts.
///
/// ```
/// use lvlog::{LevelLogger, Severity};
/// use lvlog_sink::CaptureBuffer;
///
/// let capture = CaptureBuffer::new();
/// let logger = LevelLogger::with_writer(Severity::Warning, capture.clone());
///
/// logger.infof(format_args!("hidden"));
/// logger.warningf(format_args!("disk at {}%", 91));
///
/// let output = capture.contents();
/// assert!(!output.contains("hidden"));
/// assert!(output.ends_with("[WARNING] disk at 91%\n"));
/// ```
pub struct LevelLogger {
    threshold: AtomicU8,
    sink: LineSink,
    exit: ExitHook,
}

impl LevelLogger {
    /// Creates a logger with the default threshold writing to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Severity::default(), LineSink::stderr())
    }

    /// Creates a logger from an explicit threshold and sink.
    ///
    /// The local UTC offset used for timestamps is captured here if it has
    /// not been captured yet, so construct the logger before spawning
    /// threads. See [`lvlog_sink::local_offset`].
    #[must_use]
    pub fn with_sink(threshold: Severity, sink: LineSink) -> Self {
        lvlog_sink::local_offset();
        Self {
            threshold: AtomicU8::new(threshold.as_u8()),
            sink,
            exit: process::exit,
        }
    }

    /// Creates a logger writing into an arbitrary writer.
    #[must_use]
    pub fn with_writer<W>(threshold: Severity, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_sink(threshold, LineSink::new(Destination::writer(writer)))
    }

    /// Replaces the termination hook used by fatal operations.
    #[must_use]
    pub fn with_exit_hook(mut self, exit: ExitHook) -> Self {
        self.exit = exit;
        self
    }

    /// Returns the current threshold.
    pub fn threshold(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Sets the threshold.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.as_u8(), Ordering::Relaxed);
    }

    /// Reports whether a message of `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold()
    }

    /// Reports whether lines currently go to standard error.
    pub fn writes_to_stderr(&self) -> bool {
        self.sink.is_stderr()
    }

    /// Applies `threshold` and binds `path` as the destination.
    ///
    /// The threshold always takes effect. An empty `path` keeps the current
    /// destination. Otherwise the file must already exist; it is opened
    /// read-write without truncation. When the open fails the current
    /// destination is kept and the error is returned.
    pub fn init(&self, threshold: Severity, path: impl AsRef<Path>) -> Result<(), LogError> {
        self.set_threshold(threshold);
        self.bind_file(path.as_ref())
    }

    /// Numeric form of [`init`](Self::init).
    ///
    /// A `level` outside `0..=3` returns [`LogError::InvalidLevel`] and
    /// leaves both threshold and destination untouched.
    pub fn init_level_and_file(&self, level: i64, path: impl AsRef<Path>) -> Result<(), LogError> {
        let threshold = Severity::try_from(level)?;
        self.init(threshold, path)
    }

    /// Applies parsed command-line arguments.
    ///
    /// An unknown level name prints a diagnostic on standard error and
    /// terminates through the exit hook with [`FATAL_EXIT_CODE`]. A log file
    /// that cannot be opened is reported on standard error and logging
    /// continues on the previous destination.
    pub fn init_from_args(&self, args: &LogArgs) {
        let threshold = match args.severity() {
            Ok(threshold) => threshold,
            Err(error) => {
                let _ = writeln!(io::stderr(), "{error}");
                (self.exit)(FATAL_EXIT_CODE)
            }
        };

        self.set_threshold(threshold);
        if let Some(path) = args.file()
            && let Err(error) = self.bind_file(path)
        {
            let _ = writeln!(io::stderr(), "{error}");
        }
    }

    /// Redirects output to an existing file, keeping the current destination
    /// when `path` is empty or cannot be opened.
    pub fn bind_file(&self, path: &Path) -> Result<(), LogError> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }

        let destination =
            Destination::open_existing(path).map_err(|source| LogError::file_open(path, source))?;
        self.sink.rebind(destination);
        Ok(())
    }

    /// Writes a formatted message at `severity` attributed to `site`.
    ///
    /// This is the single gate every write goes through: below the
    /// threshold nothing is formatted and nothing is written. I/O errors on
    /// the destination are discarded.
    pub fn log_at(&self, severity: Severity, site: CallSite<'_>, message: fmt::Arguments<'_>) {
        if self.enabled(severity) {
            let _ = self.sink.write_line(site, severity.prefix(), message);
        }
    }

    /// Writes a formatted message at `severity` attributed to the caller.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        self.log_at(severity, CallSite::from(Location::caller()), message);
    }

    /// Writes `values` joined at `severity` attributed to the caller.
    ///
    /// Neighbouring operands are separated by a space only when neither is
    /// a string; see [`operands!`](crate::operands).
    #[track_caller]
    pub fn log_values(&self, severity: Severity, values: &[Operand<'_>]) {
        self.log_at(
            severity,
            CallSite::from(Location::caller()),
            format_args!("{}", Joined(values)),
        );
    }

    /// Writes a formatted message at [`Severity::Debug`].
    #[track_caller]
    pub fn debugf(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Debug, message);
    }

    /// Writes `values` joined at [`Severity::Debug`].
    #[track_caller]
    pub fn debug(&self, values: &[Operand<'_>]) {
        self.log_values(Severity::Debug, values);
    }

    /// Writes a formatted message at [`Severity::Info`].
    #[track_caller]
    pub fn infof(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Info, message);
    }

    /// Writes `values` joined at [`Severity::Info`].
    #[track_caller]
    pub fn info(&self, values: &[Operand<'_>]) {
        self.log_values(Severity::Info, values);
    }

    /// Writes a formatted message at [`Severity::Warning`].
    #[track_caller]
    pub fn warningf(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Warning, message);
    }

    /// Writes `values` joined at [`Severity::Warning`].
    #[track_caller]
    pub fn warning(&self, values: &[Operand<'_>]) {
        self.log_values(Severity::Warning, values);
    }

    /// Writes a formatted message at [`Severity::Error`].
    #[track_caller]
    pub fn errorf(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Error, message);
    }

    /// Writes `values` joined at [`Severity::Error`].
    #[track_caller]
    pub fn error(&self, values: &[Operand<'_>]) {
        self.log_values(Severity::Error, values);
    }

    /// Writes a formatted message at [`Severity::Error`] and terminates.
    ///
    /// [`Error`](Severity::Error) is the highest threshold, so the message is
    /// always written. The exit hook then runs with [`FATAL_EXIT_CODE`];
    /// this call never returns.
    #[track_caller]
    pub fn fatalf(&self, message: fmt::Arguments<'_>) -> ! {
        self.log(Severity::Error, message);
        (self.exit)(FATAL_EXIT_CODE)
    }

    /// Writes `values` joined at [`Severity::Error`] and terminates.
    #[track_caller]
    pub fn fatal(&self, values: &[Operand<'_>]) -> ! {
        self.log_values(Severity::Error, values);
        (self.exit)(FATAL_EXIT_CODE)
    }
}

impl fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelLogger")
            .field("threshold", &self.threshold())
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new()
    }
}
