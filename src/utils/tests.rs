use super::error::ListenerError;
use super::logging;

#[test]
fn test_listener_error_formats_context() {
    let err = ListenerError::new("panel", "NEWMESSAGE", "render failed");

    assert_eq!(
        err.to_string(),
        "listener 'panel' failed on 'NEWMESSAGE': render failed"
    );
    assert_eq!(err.listener(), "panel");
    assert_eq!(err.topic(), "NEWMESSAGE");
    assert_eq!(err.reason(), "render failed");
}

#[test]
fn test_logging_init_is_repeatable() {
    logging::init("debug");
    logging::init("not-a-level");
}
