use workflowdoc::core::error::{AppError, DefaultErrorReporter, ErrorReporter};
use workflowdoc::core::types::{ErrorCategory, ErrorSeverity};

#[test]
fn test_error_creation_all_categories() {
    let categories = vec![
        (ErrorCategory::ParseError, "WFD-PARSE"),
        (ErrorCategory::FileNotFound, "WFD-NOT-FOUND"),
        (ErrorCategory::FileReadError, "WFD-READ"),
        (ErrorCategory::FileWriteError, "WFD-WRITE"),
        (ErrorCategory::MarkerNotFound, "WFD-MARKER"),
        (ErrorCategory::ConfigError, "WFD-CONFIG"),
        (ErrorCategory::InternalError, "WFD-INTERNAL"),
    ];

    for (category, code) in categories {
        let error = AppError::new(category, "test message");
        assert_eq!(error.category, category);
        assert_eq!(error.code, code);
        assert_eq!(error.message, "test message");
        let expected = if category == ErrorCategory::MarkerNotFound {
            ErrorSeverity::Warning
        } else {
            ErrorSeverity::Error
        };
        assert_eq!(error.severity, expected);
        assert!(error.context.is_empty());
        assert!(error.recovery_suggestions.is_empty());
        assert!(error.occurred_at <= chrono::Utc::now());
        assert!(error.source.is_none());
    }
}

#[test]
fn test_read_failure_covers_missing_and_unreadable_files() {
    assert!(AppError::new(ErrorCategory::FileNotFound, "x").is_read_failure());
    assert!(AppError::new(ErrorCategory::FileReadError, "x").is_read_failure());
    assert!(!AppError::new(ErrorCategory::MarkerNotFound, "x").is_read_failure());
}

#[test]
fn test_error_display() {
    let mut error = AppError::new(ErrorCategory::MarkerNotFound, "start marker not found");
    error.add_context("path", "README.md");

    let display = format!("{}", error);
    assert!(display.contains("WFD-MARKER"));
    assert!(display.contains("MarkerNotFound"));
    assert!(display.contains("start marker not found"));
    assert!(display.contains("README.md"));
}

#[test]
fn test_error_with_source_keeps_cause() {
    let source = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let error = AppError::with_source(
        ErrorCategory::FileWriteError,
        "failed to write README.md",
        Box::new(source),
    );

    assert!(error.source.unwrap().to_string().contains("disk full"));
}

#[test]
fn test_default_error_reporter() {
    let reporter = DefaultErrorReporter::new();
    let error = AppError::new(ErrorCategory::ParseError, "bad yaml")
        .with_suggestion("Check indentation");

    reporter.report_error(&error);
    reporter.report_warning("test warning", Some("context".to_string()));
}

#[test]
fn test_error_from_anyhow() {
    let app_error = AppError::from(anyhow::anyhow!("anyhow error message"));

    assert_eq!(app_error.category, ErrorCategory::InternalError);
    assert_eq!(app_error.code, "WFD-INTERNAL");
    assert_eq!(app_error.message, "anyhow error message");
    assert_eq!(app_error.severity, ErrorSeverity::Error);
}

#[test]
fn test_app_error_survives_anyhow_round_trip() {
    let original = AppError::new(ErrorCategory::ParseError, "bad yaml");
    let wrapped: anyhow::Error = original.into();

    let recovered = wrapped
        .downcast::<AppError>()
        .unwrap_or_else(AppError::from);
    assert_eq!(recovered.category, ErrorCategory::ParseError);
    assert_eq!(recovered.code, "WFD-PARSE");
}
