//! Integration test for the process-wide logger and its macros.
//!
//! The global logger is shared by every test in a binary, so the whole
//! lifecycle is exercised in one sequential test.

use std::fs;

use lvlog::{LogError, Severity};

/// Walks the global logger from its defaults through numeric init, file
/// binding, a failed rebind and the free-function writes.
#[test]
fn global_logger_lifecycle() {
    // Defaults before any init call.
    assert_eq!(lvlog::logger().threshold(), Severity::Info);
    assert!(lvlog::logger().writes_to_stderr());
    assert!(!lvlog::logger().enabled(Severity::Debug));
    assert!(lvlog::logger().enabled(Severity::Info));

    // Out-of-range level: rejected, nothing changes.
    let result = lvlog::init_level_and_file(5, "");
    assert!(matches!(result, Err(LogError::InvalidLevel(5))));
    assert_eq!(lvlog::logger().threshold(), Severity::Info);
    assert!(lvlog::logger().writes_to_stderr());

    // Error threshold with a file destination.
    let file = tempfile::NamedTempFile::new().expect("temp file");
    lvlog::init_level_and_file(3, file.path()).expect("bind existing file");
    assert_eq!(lvlog::logger().threshold(), Severity::Error);
    assert!(!lvlog::logger().writes_to_stderr());

    lvlog::warningf!("suppressed {}", "warning");
    lvlog::warning!("suppressed ", "concatenated");
    lvlog::infof!("suppressed info");
    let error_line = line!() + 1;
    lvlog::errorf!("disk {} failed", "sda");
    lvlog::error!("code=", 5, " retry=", false);

    let written = fs::read_to_string(file.path()).expect("read log file");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2, "{written}");
    assert!(lines[0].contains(&format!(" global_facade.rs:{error_line}: [ERROR] disk sda failed")));
    assert!(lines[1].ends_with("[ERROR] code=5 retry=false"));

    // A missing file still applies the threshold and keeps the file destination.
    let dir = tempfile::tempdir().expect("tempdir");
    let result = lvlog::init_level_and_file(0, dir.path().join("missing.log"));
    assert!(matches!(result, Err(LogError::FileOpen { .. })));
    assert_eq!(lvlog::logger().threshold(), Severity::Debug);

    lvlog::debugf!("after failed rebind");
    let written = fs::read_to_string(file.path()).expect("read log file");
    assert!(written.lines().last().is_some_and(|line| line.ends_with("[DEBUG] after failed rebind")));

    // Free functions attribute lines to their caller, not to the facade.
    let errorf_line = line!() + 1;
    lvlog::errorf(format_args!("shard {} offline", 3));
    let error_line = line!() + 1;
    lvlog::error(&lvlog::operands!["replicas=", 2, 1]);
    let debug_line = line!() + 1;
    lvlog::debug(&lvlog::operands!["queue ", "drained"]);
    let infof_line = line!() + 1;
    lvlog::infof(format_args!("tick {}", 9));
    lvlog::info(&lvlog::operands!["ok"]);
    lvlog::warningf(format_args!("slow"));
    lvlog::warning(&lvlog::operands![1.5, "s"]);

    let written = fs::read_to_string(file.path()).expect("read log file");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 10, "{written}");
    let tail = &lines[3..];
    assert!(tail[0].contains(&format!(" global_facade.rs:{errorf_line}: [ERROR] shard 3 offline")), "{written}");
    assert!(tail[1].contains(&format!(" global_facade.rs:{error_line}: [ERROR] replicas=2 1")), "{written}");
    assert!(tail[2].contains(&format!(" global_facade.rs:{debug_line}: [DEBUG] queue drained")), "{written}");
    assert!(tail[3].contains(&format!(" global_facade.rs:{infof_line}: [INFO] tick 9")), "{written}");
    assert!(tail[4].ends_with("[INFO] ok"));
    assert!(tail[5].ends_with("[WARNING] slow"));
    assert!(tail[6].ends_with("[WARNING] 1.5s"));
    assert!(!written.contains("global.rs:"), "{written}");
}
