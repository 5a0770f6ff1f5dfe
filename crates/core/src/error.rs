//! Structured error handling with context and recovery suggestions
//!
//! This module provides structured error types with:
//! - Detailed error context
//! - Recovery suggestions
//! - Error codes for programmatic handling

use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // General errors (1xxx)
    /// Unclassified failure
    Unknown = 1000,
    /// Internal invariant violated
    Internal = 1001,

    // IO errors (2xxx)
    /// Generic IO failure
    IoError = 2000,
    /// A file was expected but not found
    FileNotFound = 2001,
    /// Insufficient permissions for a file operation
    PermissionDenied = 2002,
    /// A path could not be resolved
    InvalidPath = 2003,
    /// No receipt has been saved yet
    ReceiptNotFound = 2004,

    // Preference errors (3xxx)
    /// Generic preference store failure
    PrefsError = 3000,
    /// The preference file exists but could not be parsed
    PrefsParseError = 3002,
    /// A preference value is outside the known set
    InvalidPrefValue = 3004,

    // Validation errors (6xxx)
    /// Generic validation failure
    ValidationError = 6000,
    /// User-supplied input is outside the known set
    InvalidInput = 6001,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Preferences",
            6 => "Validation",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors

    /// Generic IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// A required file is missing
    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check that the file exists and you have read permissions")
    }

    /// No saved receipt exists yet
    pub fn receipt_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ReceiptNotFound,
            format!("No saved receipt at {}", path.as_ref().display()),
        )
        .with_suggestion("Place an order first with 'bobs-pizza order'")
    }

    /// Generic preference store error
    pub fn prefs(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PrefsError, message)
    }

    /// The preference file could not be parsed
    pub fn prefs_parse(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::PrefsParseError,
            format!(
                "Could not parse preference file: {}",
                path.as_ref().display()
            ),
        )
        .with_suggestion("Fix or delete the file; defaults apply when it is absent")
    }

    /// Generic validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// User input is outside the known set of values
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command completed
    pub const SUCCESS: i32 = 0;
    /// Command failed
    pub const FAILURE: i32 = 1;
    /// User input was rejected
    pub const VALIDATION_ERROR: i32 = 2;
    /// Preference store problem
    pub const CONFIG_ERROR: i32 = 3;
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(
            ErrorCode::PrefsParseError,
            format!("TOML parse error: {}", err),
        )
        .with_source(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::new(
            ErrorCode::PrefsError,
            format!("TOML serialize error: {}", err),
        )
        .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error side of a result
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery suggestion to the error side of a result
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::PrefsError.to_string(), "E3000");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::PrefsParseError.category(), "Preferences");
        assert_eq!(ErrorCode::InvalidInput.category(), "Validation");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::file_not_found("/path/to/file").with_context("While loading preferences");

        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_receipt_not_found_suggests_ordering() {
        let err = Error::receipt_not_found("/tmp/receipt.txt");
        assert_eq!(err.code, ErrorCode::ReceiptNotFound);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("order"));
    }

    #[test]
    fn test_io_error_kind_mapping() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }
}
