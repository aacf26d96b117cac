use std::error::Error as _;

use super::*;

#[test]
fn stream_read_message_and_source() {
    let err = TokeniseError::StreamRead {
        chars_consumed: 42,
        source: io::Error::new(io::ErrorKind::UnexpectedEof, "short read"),
    };
    assert_eq!(err.to_string(), "failed to read input after 42 characters");
    assert_eq!(err.io_kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("short read")
    );
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::NonPositiveMaxTermLength { value: -3 }.to_string(),
        "max.term.length must be positive, got -3"
    );
    assert_eq!(
        ConfigError::EmptyScriptRange { low: 'z', high: 'a' }.to_string(),
        "script range is empty: 'z' is above 'a'"
    );
}
