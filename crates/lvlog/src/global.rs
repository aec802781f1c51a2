//! crates/lvlog/src/global.rs
//! Process-wide logger and the free-function facade over it.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::LogArgs;
use crate::error::LogError;
use crate::logger::LevelLogger;
use crate::operand::Operand;

static LOGGER: OnceLock<LevelLogger> = OnceLock::new();

/// Returns the process-wide logger, creating it with defaults
/// (`Info` threshold, standard error) on first use.
pub fn logger() -> &'static LevelLogger {
    LOGGER.get_or_init(LevelLogger::new)
}

/// Configures the process-wide logger from parsed command-line arguments.
///
/// Terminates the process with exit status 1 when the level name is not
/// one of `DEBUG`, `INFO`, `WARNING` or `ERROR`.
pub fn init_from_args(args: &LogArgs) {
    logger().init_from_args(args);
}

/// Configures the process-wide logger from a numeric level (`0..=3`) and an
/// optional file path (empty for standard error).
///
/// See [`LevelLogger::init_level_and_file`].
pub fn init_level_and_file(level: i64, path: impl AsRef<Path>) -> Result<(), LogError> {
    logger().init_level_and_file(level, path)
}

/// Formatted write at `Debug` on the process-wide logger.
#[track_caller]
pub fn debugf(message: fmt::Arguments<'_>) {
    logger().debugf(message);
}

/// Joining write at `Debug` on the process-wide logger.
#[track_caller]
pub fn debug(values: &[Operand<'_>]) {
    logger().debug(values);
}

/// Formatted write at `Info` on the process-wide logger.
#[track_caller]
pub fn infof(message: fmt::Arguments<'_>) {
    logger().infof(message);
}

/// Joining write at `Info` on the process-wide logger.
#[track_caller]
pub fn info(values: &[Operand<'_>]) {
    logger().info(values);
}

/// Formatted write at `Warning` on the process-wide logger.
#[track_caller]
pub fn warningf(message: fmt::Arguments<'_>) {
    logger().warningf(message);
}

/// Joining write at `Warning` on the process-wide logger.
#[track_caller]
pub fn warning(values: &[Operand<'_>]) {
    logger().warning(values);
}

/// Formatted write at `Error` on the process-wide logger.
#[track_caller]
pub fn errorf(message: fmt::Arguments<'_>) {
    logger().errorf(message);
}

/// Joining write at `Error` on the process-wide logger.
#[track_caller]
pub fn error(values: &[Operand<'_>]) {
    logger().error(values);
}

/// Formatted write at `Error`, then process exit with status 1.
#[track_caller]
pub fn fatalf(message: fmt::Arguments<'_>) -> ! {
    logger().fatalf(message)
}

/// Joining write at `Error`, then process exit with status 1.
#[track_caller]
pub fn fatal(values: &[Operand<'_>]) -> ! {
    logger().fatal(values)
}
