use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No valid price: {reason}")]
    UndefinedPrice { reason: String },

    #[error("Batch processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PricingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PricingError::UndefinedPrice { .. } => ErrorCategory::Input,
            PricingError::ConfigError { .. } | PricingError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PricingError::IoError(_) => ErrorCategory::Io,
            PricingError::CsvError(_)
            | PricingError::SerializationError(_)
            | PricingError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // An undefined price is an answer, not a failure.
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PricingError::UndefinedPrice { .. } => {
                "Use a margin below 100%, or switch to markup mode".to_string()
            }
            PricingError::ConfigError { .. } => {
                "Check that the config file exists and is valid TOML".to_string()
            }
            PricingError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
            PricingError::IoError(_) => {
                "Check the file path and its permissions".to_string()
            }
            PricingError::CsvError(_) | PricingError::ProcessingError { .. } => {
                "Make sure the batch file is a CSV with a header row".to_string()
            }
            PricingError::SerializationError(_) => {
                "Retry with CSV output instead of JSON".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PricingError::UndefinedPrice { reason } => format!("No valid price: {}", reason),
            PricingError::ConfigError { message } => format!("Configuration problem: {}", message),
            PricingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PricingError::IoError(e) => format!("Could not access a file: {}", e),
            PricingError::CsvError(e) => format!("Could not read the batch file: {}", e),
            PricingError::SerializationError(e) => format!("Could not write JSON output: {}", e),
            PricingError::ProcessingError { message } => format!("Batch failed: {}", message),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_price_is_low_severity() {
        let err = PricingError::UndefinedPrice {
            reason: "margin of 100% or more".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
        assert!(err.user_friendly_message().contains("100%"));
    }

    #[test]
    fn test_config_errors_exit_nonzero() {
        let err = PricingError::InvalidConfigValueError {
            field: "defaults.overhead_percent".to_string(),
            value: "-5".to_string(),
            reason: "must not be negative".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("defaults.overhead_percent"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: PricingError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
