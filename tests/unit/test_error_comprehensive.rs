use onlyoffice_node::core::error::{codes, AppError, DefaultErrorReporter, ErrorReporter};
use onlyoffice_node::core::types::{ErrorCategory, ErrorSeverity};

#[test]
fn test_error_creation_all_categories() {
    let categories = vec![
        ErrorCategory::ValidationError,
        ErrorCategory::UnsupportedOperation,
        ErrorCategory::HttpError,
        ErrorCategory::AuthenticationError,
        ErrorCategory::SerializationError,
        ErrorCategory::ConfigError,
        ErrorCategory::IoError,
        ErrorCategory::InternalError,
        ErrorCategory::Unknown,
    ];

    for category in categories {
        let error = AppError::new(category, "test message");
        assert_eq!(error.category, category);
        assert_eq!(error.message, "test message");
        assert!(error.context.is_empty());
        assert!(error.recovery_suggestions.is_empty());
        assert!(error.occurred_at <= chrono::Utc::now());
        assert!(error.source.is_none());
        assert!(error.code.starts_with("ERR-"));
    }
}

#[test]
fn test_error_severity_mapping() {
    assert_eq!(
        AppError::new(ErrorCategory::HttpError, "x").severity(),
        ErrorSeverity::Error
    );
    assert_eq!(
        AppError::new(ErrorCategory::Unknown, "x").severity(),
        ErrorSeverity::Info
    );
}

#[test]
fn test_unsupported_operation_constructor() {
    let error = AppError::unsupported_operation("file", "archive");
    assert_eq!(error.category, ErrorCategory::UnsupportedOperation);
    assert_eq!(error.code, codes::UNSUPPORTED_OPERATION);
    assert_eq!(error.message, "Unknown file operation: archive");
}

#[test]
fn test_display_includes_code_and_context() {
    let mut error = AppError::invalid_parameter("title is required");
    error.add_context("item", "2");
    let rendered = error.to_string();
    assert!(rendered.starts_with("[NODE-PARAM-001]"));
    assert!(rendered.contains("title is required"));
    assert!(rendered.contains("item"));
}

#[test]
fn test_conversions_keep_category() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert_eq!(AppError::from(io_error).category, ErrorCategory::IoError);

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(
        AppError::from(json_error).category,
        ErrorCategory::SerializationError
    );
}

#[test]
fn test_reporter_does_not_panic() {
    let reporter = DefaultErrorReporter::new();
    let error = AppError::invalid_parameter("bad")
        .with_suggestion("fix it");
    reporter.report_error(&error);
    reporter.report_warning("careful", Some("ctx".to_string()));
}
