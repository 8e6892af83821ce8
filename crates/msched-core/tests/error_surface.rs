use msched_core::errors::{ErrorInfo, MschedError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("name", "stationMinElevation")
        .with_context("reason", "example")
}

#[test]
fn unknown_parameter_surface() {
    let err = MschedError::UnknownParameter(sample_info("P001", "not a scoped field"));
    assert_eq!(err.info().code, "P001");
    assert!(err.info().context.contains_key("name"));
}

#[test]
fn empty_dimension_surface() {
    let err = MschedError::empty_dimension("weightDuration");
    assert_eq!(err.info().code, "empty-dimension");
    assert_eq!(
        err.info().context.get("name").map(String::as_str),
        Some("weightDuration")
    );
    assert!(err.info().hint.is_some());
}

#[test]
fn sample_size_surface() {
    let err = MschedError::InvalidSampleSize(sample_info("S001", "zero"));
    assert_eq!(err.info().code, "S001");
}

#[test]
fn overflow_surface() {
    let err = MschedError::CombinatorialOverflow(sample_info("O001", "too many"));
    assert_eq!(err.info().code, "O001");
}

#[test]
fn display_includes_context_and_hint() {
    let err = MschedError::Serde(sample_info("S002", "bad tree").with_hint("check member"));
    let text = err.to_string();
    assert!(text.starts_with("serde error: bad tree (code: S002)"));
    assert!(text.contains("name=stationMinElevation"));
    assert!(text.ends_with("hint: check member"));
}

#[test]
fn unknown_parameter_shorthand_names_path() {
    let err = MschedError::unknown_parameter("foo", "flag");
    assert!(matches!(err, MschedError::UnknownParameter(_)));
    assert_eq!(err.info().context.get("expected").map(String::as_str), Some("flag"));
}
