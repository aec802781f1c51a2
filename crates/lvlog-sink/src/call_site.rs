use std::fmt;
use std::panic::Location;

/// Source location attached to every emitted line.
///
/// Most call sites come from [`Location::caller`] through `#[track_caller]`
/// methods; bridges that only know a file name and line number (for example
/// tracing metadata) construct the value directly with [`CallSite::new`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from a source path and line number.
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the full source path as recorded by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the final path component of [`file`](Self::file).
    ///
    /// Both `/` and `\` are treated as separators so Windows build paths
    /// shorten the same way as Unix ones.
    ///
    /// ```
    /// use lvlog_sink::CallSite;
    ///
    /// assert_eq!(CallSite::new("crates/app/src/main.rs", 3).short_file(), "main.rs");
    /// assert_eq!(CallSite::new(r"src\lib.rs", 9).short_file(), "lib.rs");
    /// assert_eq!(CallSite::new("lib.rs", 1).short_file(), "lib.rs");
    /// ```
    #[must_use]
    pub fn short_file(&self) -> &'a str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}
