use crate::core::types::{ErrorCategory, ErrorSeverity};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub code: String,
    pub message: String,
    pub context: HashMap<String, String>,
    pub recovery_suggestions: Vec<String>,
    pub occurred_at: DateTime<Utc>,
    pub source: Option<anyhow::Error>,
}

fn default_code(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::ParseError => "WFD-PARSE",
        ErrorCategory::FileNotFound => "WFD-NOT-FOUND",
        ErrorCategory::FileReadError => "WFD-READ",
        ErrorCategory::FileWriteError => "WFD-WRITE",
        ErrorCategory::MarkerNotFound => "WFD-MARKER",
        ErrorCategory::ConfigError => "WFD-CONFIG",
        ErrorCategory::InternalError => "WFD-INTERNAL",
    }
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        // A README without markers does not invalidate the generated markdown.
        let severity = match category {
            ErrorCategory::MarkerNotFound => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        };
        AppError {
            category,
            severity,
            code: default_code(category).to_string(),
            message: message.into(),
            context: HashMap::new(),
            recovery_suggestions: vec![],
            occurred_at: Utc::now(),
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    pub fn with_suggestion<T: Into<String>>(mut self, suggestion: T) -> Self {
        self.recovery_suggestions.push(suggestion.into());
        self
    }

    pub fn add_context(&mut self, key: &str, value: &str) {
        self.context.insert(key.to_string(), value.to_string());
    }

    /// True for failures to read an input file, whether missing or unreadable.
    pub fn is_read_failure(&self) -> bool {
        matches!(
            self.category,
            ErrorCategory::FileNotFound | ErrorCategory::FileReadError
        )
    }

    /// Map an I/O error raised while reading `path`.
    pub fn from_read(path: &std::path::Path, err: std::io::Error) -> Self {
        let category = if err.kind() == std::io::ErrorKind::NotFound {
            ErrorCategory::FileNotFound
        } else {
            ErrorCategory::FileReadError
        };
        let mut error = AppError::with_source(
            category,
            format!("failed to read {}: {}", path.display(), err),
            Box::new(err),
        );
        error.add_context("path", &path.display().to_string());
        error
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            let mut entries: Vec<_> = self.context.iter().collect();
            entries.sort();
            write!(f, " (Context: {:?})", entries)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

/// Errors that never went through an `AppError` constructor are internal.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        let mut error = AppError::new(ErrorCategory::InternalError, format!("{:#}", e));
        error.source = Some(e);
        error
    }
}

pub trait ErrorReporter {
    fn report_error(&self, error: &AppError);
    fn report_warning(&self, message: &str, context: Option<String>);
}

/// Reports to stderr so stdout stays reserved for generated markdown.
pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &AppError) {
        let label = match error.severity {
            ErrorSeverity::Error => "ERROR",
            ErrorSeverity::Warning => "WARNING",
        };
        eprintln!("[{}] {}: {}", label, error.code, error.message);
        for suggestion in &error.recovery_suggestions {
            eprintln!("  Hint: {}", suggestion);
        }
    }

    fn report_warning(&self, message: &str, context: Option<String>) {
        eprintln!("[WARNING] {}", message);
        if let Some(ref ctx) = context {
            eprintln!("  Context: {}", ctx);
        }
    }
}
