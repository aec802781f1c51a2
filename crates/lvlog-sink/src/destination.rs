use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writable target receiving rendered log lines.
pub enum Destination {
    /// The process's standard error stream.
    Stderr,
    /// A file opened by [`Destination::open_existing`].
    File(File),
    /// Any other writer, typically an in-memory capture.
    Writer(Box<dyn Write + Send>),
}

impl Destination {
    /// Opens an existing file for reading and writing.
    ///
    /// The file is neither created nor truncated: a missing path fails with
    /// [`io::ErrorKind::NotFound`], and writes start at the beginning of the
    /// file, overwriting whatever was there.
    pub fn open_existing(path: &Path) -> io::Result<Self> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map(Self::File)
    }

    /// Boxes `writer` into a [`Destination::Writer`].
    pub fn writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::Writer(Box::new(writer))
    }

    /// Reports whether the destination is standard error.
    #[must_use]
    pub const fn is_stderr(&self) -> bool {
        matches!(self, Self::Stderr)
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::Stderr
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stderr => io::stderr().lock().write(buf),
            Self::File(file) => file.write(buf),
            Self::Writer(writer) => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().lock().write_all(buf),
            Self::File(file) => file.write_all(buf),
            Self::Writer(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().lock().flush(),
            Self::File(file) => file.flush(),
            Self::Writer(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::File(file) => f.debug_tuple("File").field(file).finish(),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}
