//! Integration tests for threshold gating and line layout.
//!
//! Each test builds its own `LevelLogger` over a capture buffer so nothing
//! depends on the process-wide instance.

use std::sync::Arc;
use std::thread;

use lvlog::{LevelLogger, Operand, Severity, operands};
use lvlog_sink::CaptureBuffer;

fn capture_logger(threshold: Severity) -> (LevelLogger, CaptureBuffer) {
    let capture = CaptureBuffer::new();
    (LevelLogger::with_writer(threshold, capture.clone()), capture)
}

fn write_every_form(logger: &LevelLogger) {
    logger.debugf(format_args!("debugf"));
    logger.debug(&operands!["debug"]);
    logger.infof(format_args!("infof"));
    logger.info(&operands!["info"]);
    logger.warningf(format_args!("warningf"));
    logger.warning(&operands!["warning"]);
    logger.errorf(format_args!("errorf"));
    logger.error(&operands!["error"]);
}

// ============================================================================
// Threshold Tests
// ============================================================================

/// Verifies each threshold lets through exactly the severities at or above it.
#[test]
fn each_threshold_emits_two_forms_per_enabled_severity() {
    for threshold in Severity::ALL {
        let (logger, capture) = capture_logger(threshold);
        write_every_form(&logger);

        let output = capture.contents();
        let enabled = Severity::ALL.iter().filter(|s| **s >= threshold).count();
        assert_eq!(output.lines().count(), enabled * 2, "threshold {threshold}");

        for severity in Severity::ALL {
            assert_eq!(
                output.contains(severity.prefix()),
                severity >= threshold,
                "severity {severity} under threshold {threshold}"
            );
        }
    }
}

/// Verifies the default threshold hides Debug and shows the rest.
#[test]
fn default_threshold_is_info() {
    let capture = CaptureBuffer::new();
    let logger = LevelLogger::with_writer(Severity::default(), capture.clone());
    write_every_form(&logger);

    let output = capture.contents();
    assert!(!output.contains("[DEBUG] "));
    assert!(output.contains("[INFO] infof"));
    assert!(output.contains("[WARNING] warning"));
    assert!(output.contains("[ERROR] errorf"));
}

/// Verifies lowering the threshold at runtime takes effect immediately.
#[test]
fn set_threshold_changes_gate() {
    let (logger, capture) = capture_logger(Severity::Error);
    logger.infof(format_args!("before"));
    logger.set_threshold(Severity::Debug);
    logger.infof(format_args!("after"));

    let output = capture.contents();
    assert!(!output.contains("before"));
    assert!(output.contains("[INFO] after"));
}

// ============================================================================
// Layout Tests
// ============================================================================

/// Verifies the warning tag follows the `file:line: ` location directly.
#[test]
fn warning_prefix_follows_location() {
    let (logger, capture) = capture_logger(Severity::Debug);
    let line = line!() + 1;
    logger.warningf(format_args!("{} retries left", 2));

    let output = capture.contents();
    let location = format!(" severity_gating.rs:{line}: ");
    let tail = output
        .split_once(&location)
        .map(|(_, tail)| tail)
        .expect("location present");
    assert_eq!(tail, "[WARNING] 2 retries left\n");
}

/// Verifies joined operands are spaced only between two non-strings.
#[test]
fn joining_spaces_only_between_non_strings() {
    let (logger, capture) = capture_logger(Severity::Debug);
    let path = std::path::Path::new("/etc/app.toml");
    let shown = path.display();
    logger.error(&operands!["cannot read ", shown, ": ", 'x', 13u8]);

    assert!(capture.contents().ends_with("[ERROR] cannot read /etc/app.toml: x 13\n"));
}

/// Verifies numbers passed on their own are separated by single spaces.
#[test]
fn joining_numbers_matches_default_conversion() {
    let (logger, capture) = capture_logger(Severity::Debug);
    logger.info(&operands![1, 2, 3.5]);
    logger.warning(&[Operand::value(&"quoted"), Operand::value(&4)]);

    let output = capture.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].ends_with("[INFO] 1 2 3.5"), "{output}");
    assert!(lines[1].ends_with("[WARNING] quoted 4"), "{output}");
}

/// Verifies an empty operand list still writes the prefix.
#[test]
fn empty_concatenation_writes_prefix_only() {
    let (logger, capture) = capture_logger(Severity::Debug);
    logger.info(&[]);
    assert!(capture.contents().ends_with(" [INFO] \n"));
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Verifies a shared logger serializes lines from many threads.
#[test]
fn shared_logger_keeps_lines_whole() {
    let capture = CaptureBuffer::new();
    let logger = Arc::new(LevelLogger::with_writer(Severity::Info, capture.clone()));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for n in 0..100 {
                    logger.infof(format_args!("worker {worker} item {n}"));
                    logger.debugf(format_args!("hidden {worker}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread");
    }

    let output = capture.contents();
    assert_eq!(output.lines().count(), 400);
    assert!(output.lines().all(|line| line.contains(": [INFO] worker ")));
}
