use braid_core::errors::{BraidError, ErrorInfo};
use braid_core::Bounds;

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("index", "1")
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = BraidError::InvalidArgument(sample_info("I001", "zero letter"));
    assert_eq!(err.info().code, "I001");
    assert!(err.info().context.contains_key("index"));
    assert!(err.to_string().starts_with("invalid argument: zero letter (code: I001)"));
}

#[test]
fn config_error_surface() {
    let err = BraidError::Config(sample_info("C001", "bad yaml").with_hint("check indentation"));
    assert_eq!(err.info().code, "C001");
    assert!(err.to_string().ends_with("| hint: check indentation"));
}

#[test]
fn io_and_serde_error_surface() {
    assert_eq!(BraidError::Io(sample_info("IO01", "denied")).info().code, "IO01");
    assert_eq!(BraidError::Serde(sample_info("S001", "schema")).info().code, "S001");
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = BraidError::invalid("bounds-maxgen", "maxgen must be positive");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "InvalidArgument");
    assert_eq!(json["detail"]["code"], "bounds-maxgen");
}

#[test]
fn non_positive_bounds_are_rejected() {
    assert_eq!(Bounds::new(0, 10).unwrap_err().info().code, "bounds-maxgen");
    assert_eq!(Bounds::new(9, 0).unwrap_err().info().code, "bounds-maxlen");
    assert_eq!(Bounds::default(), Bounds::new(9, 10).unwrap());
}
