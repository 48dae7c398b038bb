use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GadhashError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to read '{path}': {source}")]
    SourceReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Mixture of file name(s) and stdin specified")]
    MixedSourcesError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl GadhashError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GadhashError::IoError(_) => ErrorCategory::Output,
            GadhashError::SourceReadError { .. } => ErrorCategory::Input,
            GadhashError::MixedSourcesError
            | GadhashError::ConfigError { .. }
            | GadhashError::ConfigValidationError { .. }
            | GadhashError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 下游關閉管線 (例如 `| head`)，已輸出的資料仍然有效
            GadhashError::IoError(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            GadhashError::IoError(_) => ErrorSeverity::Critical,
            GadhashError::SourceReadError { .. } => ErrorSeverity::High,
            GadhashError::MixedSourcesError
            | GadhashError::ConfigError { .. }
            | GadhashError::ConfigValidationError { .. }
            | GadhashError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GadhashError::IoError(e) => format!("Could not read stdin or write output: {}", e),
            GadhashError::SourceReadError { path, source } => {
                format!("Could not read '{}': {}", path, source)
            }
            GadhashError::MixedSourcesError => {
                "Mixture of file name(s) and stdin specified. Specify file name(s) OR stdin ('-')."
                    .to_string()
            }
            GadhashError::ConfigError { message } => format!("Configuration problem: {}", message),
            GadhashError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            GadhashError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has invalid value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GadhashError::IoError(_) => "Check that stdout is writable and stdin is readable",
            GadhashError::SourceReadError { .. } => {
                "Check that the file exists and that you have permission to read it"
            }
            GadhashError::MixedSourcesError => {
                "Pass either a single '-' to read stdin, or one or more file names"
            }
            GadhashError::ConfigError { .. } | GadhashError::ConfigValidationError { .. } => {
                "Check the config file is valid TOML with optional [input] and [output] tables"
            }
            GadhashError::InvalidConfigValueError { .. } => {
                "Correct the value on the command line or in the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GadhashError>;

/// Diagnostic for failures that never became a [`GadhashError`] (panics).
pub fn unexpected_failure_message(detail: impl std::fmt::Display) -> String {
    format!(
        "Unexpected error:\n{}\nRe-run with --verbose and report the output if the problem persists.",
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe_is_low_severity() {
        let err = GadhashError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Output);

        let err = GadhashError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_mixed_sources_message() {
        let err = GadhashError::MixedSourcesError;
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("stdin ('-')"));
    }

    #[test]
    fn test_source_read_error_names_path() {
        let err = GadhashError::SourceReadError {
            path: "missing.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_unexpected_failure_message() {
        let message = unexpected_failure_message("index out of bounds");
        assert!(message.starts_with("Unexpected error:\n"));
        assert!(message.contains("index out of bounds"));
    }
}
