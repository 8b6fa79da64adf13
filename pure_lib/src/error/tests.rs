//! Unit tests for error construction and conversions.

use camino::Utf8Path;
use rstest::rstest;

use super::PureError;

#[rstest]
#[case(
    PureError::invalid_argument("message", "must not be null"),
    "invalid argument 'message': must not be null"
)]
#[case(PureError::invalid_operation("boom"), "boom")]
#[case(PureError::InvalidCast { expected: "u32" }, "value is not of type u32")]
fn renders_messages(#[case] err: PureError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn classifies_variants() {
    assert!(PureError::invalid_operation("x").is_invalid_operation());
    assert!(!PureError::invalid_operation("x").is_invalid_argument());
    assert!(PureError::invalid_argument("path", "x").is_invalid_argument());
}

#[test]
fn io_error_keeps_path_and_source() {
    let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = PureError::io(Utf8Path::new("out/log.txt"), source);
    assert_eq!(err.to_string(), "I/O error on 'out/log.txt': denied");
    let io: std::io::Error = err.into();
    assert_eq!(io.kind(), std::io::ErrorKind::PermissionDenied);
}

#[test]
fn invalid_argument_converts_to_invalid_input() {
    let io: std::io::Error = PureError::invalid_argument("path", "no file name").into();
    assert_eq!(io.kind(), std::io::ErrorKind::InvalidInput);
}

#[test]
fn json_errors_convert_from_serde() {
    let json_err = serde_json::from_str::<u8>("nope").err();
    let Some(source) = json_err else {
        panic!("expected malformed JSON to fail");
    };
    let err = PureError::from(source);
    assert!(matches!(err, PureError::Json(_)));
    assert!(err.to_string().starts_with("JSON error:"));
}
