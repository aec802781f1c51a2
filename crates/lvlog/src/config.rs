//! crates/lvlog/src/config.rs
//! Command-line surface for the logger: `--log-level` and `--log-file`.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::LogError;
use crate::severity::Severity;

/// Logging options a host program flattens into its own clap parser.
///
/// ```
/// use clap::Parser;
/// use lvlog::LogArgs;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     log: LogArgs,
/// }
///
/// let cli = Cli::parse_from(["app", "--log-level", "DEBUG", "--log-file", "app.log"]);
/// assert_eq!(cli.log.log_level, "DEBUG");
/// assert_eq!(cli.log.file(), Some(std::path::Path::new("app.log")));
/// ```
///
/// The level is kept as text so that an unknown name reaches
/// [`init_from_args`](crate::init_from_args) and is reported there instead of
/// by clap's own validation.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogArgs {
    /// log level, can only be DEBUG, INFO, WARNING, ERROR
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// log file name; must already exist. Standard error when absent.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    /// Creates arguments for an explicit level name and optional file.
    pub fn new(log_level: impl Into<String>, log_file: Option<PathBuf>) -> Self {
        Self {
            log_level: log_level.into(),
            log_file,
        }
    }

    /// Parses [`log_level`](Self::log_level) into a [`Severity`].
    pub fn severity(&self) -> Result<Severity, LogError> {
        self.log_level.parse()
    }

    /// Returns the configured log file, treating an empty path as absent.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.log_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

impl Default for LogArgs {
    fn default() -> Self {
        Self::new(Severity::Info.name(), None)
    }
}
