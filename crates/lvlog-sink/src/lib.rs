#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/lvlog-sink/src/lib.rs
//!
//! # Overview
//!
//! `lvlog-sink` owns the output side of the `lvlog` facade: where rendered
//! lines go ([`Destination`]) and how each line is laid out ([`render_line`]).
//! The level gating itself lives in the `lvlog` crate; this crate never
//! inspects severities, it only receives an already-selected prefix.
//!
//! # Design
//!
//! [`LineSink`] wraps a [`Destination`] in a mutex. Each call to
//! [`LineSink::write_line`] renders the complete line into a local buffer
//! first and then issues a single `write_all` while holding the lock, so
//! lines emitted from concurrent threads never interleave.
//!
//! # Line format
//!
//! ```text
//! 2009/01/23 01:23:23 main.rs:42: [WARNING] disk almost full
//! ```
//!
//! The timestamp uses the local offset captured by the first call to
//! [`local_offset`], or UTC when it could not be read at that point. The location is the final path component of the caller's
//! source file. A newline is appended unless the message already ends with
//! one.
//!
//! # Examples
//!
//! ```
//! use lvlog_sink::{CallSite, CaptureBuffer, Destination, LineSink};
//!
//! let capture = CaptureBuffer::new();
//! let sink = LineSink::new(Destination::writer(capture.clone()));
//!
//! sink.write_line(CallSite::new("src/main.rs", 7), "[INFO] ", format_args!("ready"))?;
//!
//! let output = capture.contents();
//! assert!(output.ends_with(" main.rs:7: [INFO] ready\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod call_site;
mod capture;
mod destination;
mod line;
mod sink;

pub use call_site::CallSite;
pub use capture::CaptureBuffer;
pub use destination::Destination;
pub use line::{TIMESTAMP_FORMAT, current_timestamp, local_offset, render_line};
pub use sink::LineSink;
