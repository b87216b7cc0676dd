use dircols::telemetry::{LogMessage, format_context, init, log_with_context};
use log::Level;
use serial_test::serial;

// Log output is not captured here; these tests check that initialization is
// idempotent, logging never panics, and context formatting is stable

#[test]
#[serial]
fn test_multiple_init_calls() {
    let first_result = init();
    let second_result = init();

    assert!(first_result.is_ok());
    assert!(second_result.is_ok());
}

#[test]
#[serial]
fn test_log_with_context_all_levels() {
    init().ok();

    for level in [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ] {
        log_with_context(
            level,
            LogMessage {
                message: "Scan complete".to_string(),
                module: "telemetry_test",
                context: Some(vec![("root", "/tmp".to_string())]),
            },
        );
    }
}

#[test]
fn test_format_context() {
    let msg = LogMessage {
        message: "Skipping entry".to_string(),
        module: "scan",
        context: Some(vec![
            ("path", "/tmp/x".to_string()),
            ("reason", "denied".to_string()),
        ]),
    };
    assert_eq!(format_context(&msg), "Skipping entry [path=/tmp/x, reason=denied]");

    let msg = LogMessage {
        message: "No context".to_string(),
        module: "scan",
        context: None,
    };
    assert_eq!(format_context(&msg), "No context");
}
