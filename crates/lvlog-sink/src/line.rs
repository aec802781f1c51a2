use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;

use time::{OffsetDateTime, UtcOffset};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::call_site::CallSite;

/// Timestamp layout placed at the start of every line (`2009/01/23 01:23:23`).
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Returns the local UTC offset, reading it on the first call only.
///
/// On Unix the offset can only be read while the process has a single
/// thread. Call this before spawning threads; if the first call happens
/// later, or the offset is otherwise unavailable, UTC is used from then on.
pub fn local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// Returns the current time in the offset captured by [`local_offset`].
#[must_use]
pub fn current_timestamp() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(local_offset())
}

/// Renders one complete log line into `buf`.
///
/// The layout is `<date> <time> <file>:<line>: <prefix><message>` followed by
/// a newline unless the message already ends with one.
///
/// ```
/// use lvlog_sink::{CallSite, render_line};
/// use time::macros::datetime;
///
/// let mut line = Vec::new();
/// render_line(
///     &mut line,
///     datetime!(2009-01-23 01:23:23 UTC),
///     CallSite::new("src/server.rs", 42),
///     "[ERROR] ",
///     format_args!("bind failed: {}", "address in use"),
/// )?;
///
/// assert_eq!(
///     line,
///     b"2009/01/23 01:23:23 server.rs:42: [ERROR] bind failed: address in use\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_line(
    buf: &mut Vec<u8>,
    timestamp: OffsetDateTime,
    site: CallSite<'_>,
    prefix: &str,
    message: fmt::Arguments<'_>,
) -> io::Result<()> {
    timestamp
        .format_into(&mut *buf, TIMESTAMP_FORMAT)
        .map_err(io::Error::other)?;
    write!(buf, " {site}: {prefix}{message}")?;
    if !buf.ends_with(b"\n") {
        buf.push(b'\n');
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn render(message: fmt::Arguments<'_>) -> String {
        let mut buf = Vec::new();
        render_line(
            &mut buf,
            datetime!(2024-03-05 07:08:09 UTC),
            CallSite::new("crates/app/src/main.rs", 12),
            "[WARNING] ",
            message,
        )
        .expect("render succeeds");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn pads_date_and_time_fields() {
        assert_eq!(
            render(format_args!("low disk")),
            "2024/03/05 07:08:09 main.rs:12: [WARNING] low disk\n"
        );
    }

    #[test]
    fn existing_newline_is_not_doubled() {
        let line = render(format_args!("done\n"));
        assert!(line.ends_with("done\n"));
        assert!(!line.ends_with("\n\n"));
    }

    #[test]
    fn empty_message_still_terminates_line() {
        assert_eq!(
            render(format_args!("")),
            "2024/03/05 07:08:09 main.rs:12: [WARNING] \n"
        );
    }

    #[test]
    fn timestamps_use_the_captured_offset() {
        let offset = local_offset();
        let handle = std::thread::spawn(local_offset);
        assert_eq!(handle.join().expect("thread"), offset);
        assert_eq!(current_timestamp().offset(), offset);
    }

    #[test]
    fn local_offset_is_preserved() {
        let mut buf = Vec::new();
        render_line(
            &mut buf,
            datetime!(2024-12-31 23:59:59 +05:30),
            CallSite::new("lib.rs", 1),
            "[INFO] ",
            format_args!("tick"),
        )
        .expect("render succeeds");
        assert!(buf.starts_with(b"2024/12/31 23:59:59 "));
    }
}
