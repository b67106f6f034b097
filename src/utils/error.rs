use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("Index {index} is out of range (available: {len})")]
    OutOfRange { index: i64, len: usize },

    #[error("Could not parse '{input}': {reason}")]
    ParseFailure { input: String, reason: String },

    #[error("Unknown playground: {name}")]
    UnknownPlayground { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,   // 輸入錯誤
            ErrorSeverity::High => 1,     // 設定錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl PlaygroundError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlaygroundError::OutOfRange { .. }
            | PlaygroundError::ParseFailure { .. }
            | PlaygroundError::UnknownPlayground { .. } => ErrorCategory::Input,
            PlaygroundError::ConfigError { .. }
            | PlaygroundError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlaygroundError::IoError(_) | PlaygroundError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者可以直接重新輸入
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlaygroundError::OutOfRange { len, .. } => {
                format!("Pick an index between 0 and {}", len.saturating_sub(1))
            }
            PlaygroundError::ParseFailure { .. } => {
                "Enter a whole number from the listed options".to_string()
            }
            PlaygroundError::UnknownPlayground { .. } => {
                "Run with --list to see the available playgrounds".to_string()
            }
            PlaygroundError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            PlaygroundError::SerializationError(_) => {
                "Retry without --json to get plain text output".to_string()
            }
            PlaygroundError::ConfigError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            PlaygroundError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlaygroundError::OutOfRange { index, len } => format!(
                "There is no option number {} ({} options available)",
                index, len
            ),
            PlaygroundError::ParseFailure { input, .. } => {
                format!("'{}' is not a valid selection", input.trim())
            }
            PlaygroundError::UnknownPlayground { name } => {
                format!("No playground called '{}'", name)
            }
            PlaygroundError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = PlaygroundError::OutOfRange { index: 5, len: 2 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.recovery_suggestion(), "Pick an index between 0 and 1");
        assert_eq!(err.severity().exit_code(), 2);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PlaygroundError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("missing"));
    }

    #[test]
    fn test_exit_codes_grow_with_severity() {
        let config = PlaygroundError::ConfigError {
            message: "bad".to_string(),
        };
        let io: PlaygroundError = std::io::Error::other("disk").into();

        assert_eq!(config.severity().exit_code(), 1);
        assert_eq!(io.severity().exit_code(), 3);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
        assert!(ErrorSeverity::High < ErrorSeverity::Critical);
    }
}
