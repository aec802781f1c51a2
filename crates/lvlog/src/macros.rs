//! crates/lvlog/src/macros.rs
//! Logging macros over the process-wide logger.
//!
//! The `*f` macros take `format!` arguments. The plain macros take a list
//! of `Display` expressions and join them: a space separates two neighbours
//! only when neither is a string.

/// Formatted write at `Debug`.
///
/// # Example
/// ```
/// lvlog::debugf!("cache hit ratio {:.2}", 0.75);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::logger().debugf(::std::format_args!($($arg)+))
    };
}

/// Concatenating write at `Debug`.
///
/// # Example
/// ```
/// let shard = 4;
/// lvlog::debug!("rebalancing shard ", shard);
/// // rebalancing shard 4
/// lvlog::debug!(shard, 7);
/// // 4 7
/// ```
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::logger().debug(&$crate::operands![$($value),*])
    };
}

/// Formatted write at `Info`.
///
/// # Example
/// ```
/// lvlog::infof!("listening on {}:{}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::logger().infof(::std::format_args!($($arg)+))
    };
}

/// Concatenating write at `Info`.
///
/// # Example
/// ```
/// lvlog::info!("loaded ", 12, " plugins");
/// ```
#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {
        $crate::logger().info(&$crate::operands![$($value),*])
    };
}

/// Formatted write at `Warning`.
///
/// # Example
/// ```
/// lvlog::warningf!("retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::logger().warningf(::std::format_args!($($arg)+))
    };
}

/// Concatenating write at `Warning`.
///
/// # Example
/// ```
/// lvlog::warning!("config file missing, using defaults");
/// ```
#[macro_export]
macro_rules! warning {
    ($($value:expr),* $(,)?) => {
        $crate::logger().warning(&$crate::operands![$($value),*])
    };
}

/// Formatted write at `Error`.
///
/// # Example
/// ```
/// lvlog::errorf!("request {} failed: {}", 17, "timeout");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::logger().errorf(::std::format_args!($($arg)+))
    };
}

/// Concatenating write at `Error`.
///
/// # Example
/// ```
/// lvlog::error!("lost connection to ", "db-1");
/// ```
#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {
        $crate::logger().error(&$crate::operands![$($value),*])
    };
}

/// Formatted write at `Error` followed by process exit with status 1.
///
/// # Example
/// ```no_run
/// lvlog::fatalf!("cannot bind {}", "0.0.0.0:80");
/// ```
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::logger().fatalf(::std::format_args!($($arg)+))
    };
}

/// Concatenating write at `Error` followed by process exit with status 1.
///
/// # Example
/// ```no_run
/// lvlog::fatal!("unrecoverable state: ", 42);
/// ```
#[macro_export]
macro_rules! fatal {
    ($($value:expr),* $(,)?) => {
        $crate::logger().fatal(&$crate::operands![$($value),*])
    };
}
