//! Integration tests for the message-handling system
//!
//! These tests verify:
//! - Logger generation and severity thresholds
//! - Shared-logger composition and destination identity
//! - Console/warning/log independence
//! - raise ordering (durable log entry before propagation)
//! - Thread-safe dispatch and the accepted set_logger race

use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

use subtitle_stills::core::registry;
use subtitle_stills::prelude::*;

/// Warning sink that records messages for assertions.
struct CollectingWarnings(Mutex<Vec<String>>);

impl CollectingWarnings {
    fn new() -> Arc<Self> {
        Arc::new(Self(Mutex::new(Vec::new())))
    }

    fn messages(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl WarningSink for CollectingWarnings {
    fn emit(&self, message: &str) {
        self.0.lock().push(message.to_string());
    }
}

#[test]
fn test_scenario_shared_logger_end_to_end() {
    // A first object creates the logger; a second, verbose object adopts it.
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("test.log");
    let warnings = CollectingWarnings::new();

    let first = MessageHandler::builder()
        .log_filepath(&log_file)
        .logger_name("testing")
        .build()
        .expect("first handler");

    let second = MessageHandler::builder()
        .verbose(true)
        .suppress_warnings(false)
        .shared_logger(first.logger().expect("first has a logger"))
        .warning_sink(Arc::clone(&warnings) as Arc<dyn WarningSink>)
        .build()
        .expect("second handler");

    second.print("Info text");
    second.warn("Warning text");
    let err = second.raise(MessageError::invalid_level("An error"));
    assert!(matches!(err, MessageError::InvalidLevel { .. }));

    assert_eq!(warnings.messages(), ["Warning text"]);

    let content = fs::read_to_string(&log_file).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(":INFO:testing:Info text"));
    assert!(lines[1].contains(":WARNING:testing:Warning text"));
    assert!(lines[2].contains(":ERROR:testing:"));
    assert!(lines[2].contains("An error"));
}

#[test]
fn test_scenario_fully_silent_mode() {
    // No log file, no shared logger, not verbose: print has no observable
    // output, but warnings still fire by default.
    let warnings = CollectingWarnings::new();
    let handler = MessageHandler::builder()
        .warning_sink(Arc::clone(&warnings) as Arc<dyn WarningSink>)
        .build()
        .expect("silent handler");

    handler.print("x");
    assert!(handler.logger().is_none());
    assert!(warnings.messages().is_empty());

    handler.warn("y");
    assert_eq!(warnings.messages(), ["y"]);
}

#[test]
fn test_shared_destination_survives_divergent_settings() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("shared.log");

    let first = MessageHandler::builder()
        .log_filepath(&log_file)
        .logger_name("shared-destination")
        .logger_format("{name}:{message}")
        .build()
        .expect("first handler");
    let logger = first.logger().expect("logger");

    let mut second = MessageHandler::builder()
        .shared_logger(Arc::clone(&logger))
        .build()
        .expect("second handler");
    second.set_verbose(true);
    second.set_suppress_warnings(true);

    // Same underlying sink, not a copy.
    assert!(Arc::ptr_eq(&logger, &second.logger().unwrap()));

    first.print("from first");
    second.print("from second");
    second.warn("suppressed but logged");

    let content = fs::read_to_string(&log_file).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "shared-destination:from first",
            "shared-destination:from second",
            "shared-destination:suppressed but logged",
        ]
    );
}

#[test]
fn test_shared_logger_sees_config_changes() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("config.log");

    let first = MessageHandler::builder()
        .log_filepath(&log_file)
        .logger_name("shared-config")
        .logger_format("{message}")
        .build()
        .expect("first handler");
    let logger = first.logger().expect("logger");

    // A threshold change through one holder is visible to all holders.
    logger.set_min_level(LogLevel::Error);

    let second = MessageHandler::builder()
        .shared_logger(logger)
        .build()
        .expect("second handler");
    second.print("dropped at the logger");

    let content = fs::read_to_string(&log_file).expect("read log");
    assert!(content.is_empty());
}

#[test]
fn test_raise_logs_before_returning() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("raise.log");

    let handler = MessageHandler::builder()
        .log_filepath(&log_file)
        .logger_name("raise-ordering")
        .logger_format("{level}:{message}")
        .build()
        .expect("handler");

    let returned = handler.raise(MessageError::ffmpeg("stream not found"));

    // By the time raise hands the error back, the entry is durable.
    let content = fs::read_to_string(&log_file).expect("read log");
    assert!(content.contains("ERROR:ffmpeg error: stream not found"));
    assert!(matches!(returned, MessageError::Ffmpeg(_)));
}

#[test]
fn test_invalid_level_surfaces_through_builder() {
    let temp_dir = TempDir::new().expect("temp dir");
    let err = MessageHandler::builder()
        .log_filepath(temp_dir.path().join("invalid.log"))
        .logger_name("invalid-level")
        .logger_level("noisy")
        .build()
        .unwrap_err();
    assert!(matches!(err, MessageError::InvalidLevel { .. }));
}

#[test]
fn test_unopenable_log_file_surfaces_through_builder() {
    let temp_dir = TempDir::new().expect("temp dir");
    let err = MessageHandler::builder()
        .log_filepath(temp_dir.path().join("missing").join("x.log"))
        .logger_name("unopenable")
        .build()
        .unwrap_err();
    assert!(matches!(err, MessageError::LogFileUnavailable { .. }));
}

#[test]
fn test_generator_accumulates_handlers_across_builders() {
    // Known accumulation behavior: building twice against the same logger
    // name attaches a second handler rather than replacing the first.
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("accumulate.log");

    let build = || {
        MessageHandler::builder()
            .log_filepath(&log_file)
            .logger_name("builder-accumulate")
            .logger_format("{message}")
            .build()
            .expect("handler")
    };
    let first = build();
    let _second = build();

    let logger = first.logger().expect("logger");
    assert_eq!(logger.handler_count(), 2);

    first.print("once");
    let content = fs::read_to_string(&log_file).expect("read log");
    assert_eq!(content, "once\nonce\n");
}

#[test]
fn test_concurrent_prints_with_thread_safety() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let handler = Arc::new(
        MessageHandler::builder()
            .thread_safe(true)
            .log_filepath(&log_file)
            .logger_name("concurrent-prints")
            .logger_format("{message}")
            .build()
            .expect("handler"),
    );

    let threads: Vec<_> = (0..8)
        .map(|t| {
            let handler = Arc::clone(&handler);
            std::thread::spawn(move || {
                for i in 0..50 {
                    handler.print(format!("t{} m{}", t, i));
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().expect("thread finished");
    }

    let content = fs::read_to_string(&log_file).expect("read log");
    assert_eq!(content.lines().count(), 400);
}

#[test]
fn test_set_logger_race_is_safe() {
    // set_logger is deliberately outside the dispatch lock; a concurrent
    // print may use either logger. The guarantee is memory safety and that
    // every message lands in exactly one of the two destinations.
    let temp_dir = TempDir::new().expect("temp dir");
    let old_file = temp_dir.path().join("race-old.log");
    let new_file = temp_dir.path().join("race-new.log");

    let handler = Arc::new(
        MessageHandler::builder()
            .thread_safe(true)
            .log_filepath(&old_file)
            .logger_name("race-old")
            .logger_format("{message}")
            .build()
            .expect("handler"),
    );

    let new_logger = LoggerGenerator::new(&new_file, Some("race-new"))
        .expect("generator")
        .generate(None, Some("{message}"))
        .expect("generate");

    let printer = {
        let handler = Arc::clone(&handler);
        std::thread::spawn(move || {
            for i in 0..200 {
                handler.print(format!("message {}", i));
            }
        })
    };
    handler
        .set_logger(LoggerOptions::shared(new_logger))
        .expect("swap logger");
    printer.join().expect("printer finished");

    let old_lines = fs::read_to_string(&old_file).expect("read old").lines().count();
    let new_lines = fs::read_to_string(&new_file).expect("read new").lines().count();
    assert_eq!(old_lines + new_lines, 200);
}

#[test]
fn test_registry_identity_from_generator() {
    let temp_dir = TempDir::new().expect("temp dir");
    let logger = LoggerGenerator::new(temp_dir.path().join("a.log"), Some("registry-view"))
        .expect("generator")
        .generate(Some("debug"), None)
        .expect("generate");

    let looked_up = registry::get("registry-view").expect("registered");
    assert!(Arc::ptr_eq(&logger, &looked_up));
    assert_eq!(looked_up.min_level(), LogLevel::Debug);
}
