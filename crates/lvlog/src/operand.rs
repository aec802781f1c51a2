//! crates/lvlog/src/operand.rs
//! Operands of the concatenating write forms.
//!
//! The plain write forms join their operands the way a default string
//! conversion of a value list does: operands are written back to back, and
//! a single space goes between two neighbours only when neither is a string.
//! `("copied ", 3, " files")` becomes `copied 3 files` and `(1, 2, 3.5)`
//! becomes `1 2 3.5`.
//!
//! Whether an operand is a string is decided from its static type when the
//! operand list is built by [`operands!`](crate::operands), so a
//! `&str`, `String` or anything else implementing `AsRef<str>` counts as a
//! string and every other `Display` value does not.

use std::fmt;

/// One value passed to a concatenating write.
#[derive(Clone, Copy)]
pub struct Operand<'a> {
    value: &'a dyn fmt::Display,
    string: bool,
}

impl<'a> Operand<'a> {
    /// Creates an operand, stating whether it counts as a string.
    #[must_use]
    pub const fn new(value: &'a dyn fmt::Display, string: bool) -> Self {
        Self { value, string }
    }

    /// A string operand: never separated from its neighbours.
    #[must_use]
    pub const fn text(value: &'a dyn fmt::Display) -> Self {
        Self::new(value, true)
    }

    /// A non-string operand: separated by a space from a non-string neighbour.
    #[must_use]
    pub const fn value(value: &'a dyn fmt::Display) -> Self {
        Self::new(value, false)
    }

    /// Reports whether this operand counts as a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        self.string
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operand")
            .field("value", &format_args!("{}", self.value))
            .field("string", &self.string)
            .finish()
    }
}

/// Displays an operand list with the string-aware spacing rule.
pub(crate) struct Joined<'a>(pub(crate) &'a [Operand<'a>]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<&Operand<'_>> = None;
        for operand in self.0 {
            if let Some(previous) = previous
                && !previous.string
                && !operand.string
            {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(operand.value, f)?;
            previous = Some(operand);
        }
        Ok(())
    }
}

/// Type classification used by [`operands!`](crate::operands).
///
/// Method resolution prefers [`StringKind`] on `Kind<T>` when
/// `T: AsRef<str>` and falls back to [`OtherKind`] on `&Kind<T>`.
#[doc(hidden)]
pub mod classify {
    /// Wraps a reference to an operand for classification.
    pub struct Kind<'a, T: ?Sized>(pub &'a T);

    /// Selected for string-like operands.
    pub trait StringKind {
        /// Always `true`.
        fn is_string(&self) -> bool {
            true
        }
    }

    impl<T: AsRef<str> + ?Sized> StringKind for Kind<'_, T> {}

    /// Selected for every other operand.
    pub trait OtherKind {
        /// Always `false`.
        fn is_string(&self) -> bool {
            false
        }
    }

    impl<T: ?Sized> OtherKind for &Kind<'_, T> {}
}

/// Builds an operand array for the concatenating write forms.
///
/// Each expression is evaluated once and classified as a string or not from
/// its type.
///
/// # Example
/// ```
/// use lvlog::{LevelLogger, Severity};
/// use lvlog_sink::CaptureBuffer;
///
/// let capture = CaptureBuffer::new();
/// let logger = LevelLogger::with_writer(Severity::Info, capture.clone());
/// logger.info(&lvlog::operands![1, 2, "x", 3.5]);
/// assert!(capture.contents().ends_with("[INFO] 1 2x3.5\n"));
/// ```
#[macro_export]
macro_rules! operands {
    ($($value:expr),* $(,)?) => {
        [$(
            match &$value {
                value => {
                    #[allow(unused_imports)]
                    use $crate::__operand::{OtherKind as _, StringKind as _};
                    $crate::Operand::new(value, (&$crate::__operand::Kind(value)).is_string())
                }
            }
        ),*]
    };
}
