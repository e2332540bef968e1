use std::fmt::Display;

/// Application-wide error types for theme document handling.
///
/// Errors split into three categories: problems reading, parsing or writing
/// a document ([`Config`]), semantic rule violations inside an otherwise
/// well-formed document ([`Validation`]), and plain I/O failures ([`Io`]).
///
/// [`Config`]: AppError::Config
/// [`Validation`]: AppError::Validation
/// [`Io`]: AppError::Io
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Document loading, parsing and serialization failures.
    Config(String),

    /// Semantic validation failures (bad globs, palette ordering,
    /// unresolved token references).
    Validation(String),

    /// File system and I/O operation failures.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_prefix() {
        let err = AppError::Validation("shade steps out of order".to_string());
        assert_eq!(
            err.to_string(),
            "Validation Error: shade steps out of order"
        );
    }

    #[test]
    fn io_errors_convert_into_app_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
