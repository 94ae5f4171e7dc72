use std::fmt::Display;

/// Application-wide error types for the Swatchy terminal interface.
///
/// Covers component lifecycle failures, state-file problems surfaced by the
/// core library, and configuration issues. Theme selection itself has no
/// error conditions (unknown identifiers are accepted by design), so the
/// taxonomy stays small.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors.
    Component(String),

    /// Persisted selection state could not be read or written.
    Store(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// Application state management issues.
    State(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::Store(msg) => write!(f, "Store Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<swatchy_core::CoreError> for AppError {
    fn from(err: swatchy_core::CoreError) -> Self {
        AppError::Store(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_detail() {
        let err = AppError::Store("disk full".to_string());
        assert_eq!(err.to_string(), "Store Error: disk full");
    }

    #[test]
    fn core_errors_convert_to_store_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = swatchy_core::CoreError::Io(io).into();
        assert!(matches!(err, AppError::Store(_)));
    }
}
