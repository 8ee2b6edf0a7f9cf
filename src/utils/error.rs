use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to decode {document} as UTF-8 text: {source}")]
    DecodeError {
        document: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid {field} value {value:?} on row {row}: {source}")]
    FieldParseError {
        field: String,
        row: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Analysis skipped: {message}")]
    InsufficientData { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::DecodeError { .. }
            | EtlError::CsvError(_)
            | EtlError::FieldParseError { .. }
            | EtlError::InsufficientData { .. } => ErrorCategory::Input,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::ZipError(_) | EtlError::IoError(_) | EtlError::SerializationError(_) => {
                ErrorCategory::Output
            }
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 資料不足只是警告，不視為失敗
            EtlError::InsufficientData { .. } => ErrorSeverity::Low,
            EtlError::DecodeError { .. }
            | EtlError::CsvError(_)
            | EtlError::FieldParseError { .. } => ErrorSeverity::Medium,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::ProcessingError { .. } => ErrorSeverity::High,
            EtlError::ZipError(_) | EtlError::IoError(_) | EtlError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// True for failures raised while turning raw documents into records.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            EtlError::DecodeError { .. } | EtlError::CsvError(_) | EtlError::FieldParseError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::DecodeError { document, .. } => {
                format!("Save the {} file as UTF-8 encoded CSV", document)
            }
            EtlError::CsvError(_) => {
                "Check that the file is comma-separated and has a header row".to_string()
            }
            EtlError::FieldParseError { field, row, .. } => format!(
                "Fix the {} column on row {} so it is numeric or empty",
                field, row
            ),
            EtlError::InsufficientData { .. } => {
                "Make sure both files have the expected columns and are not empty".to_string()
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line flags or configuration file".to_string()
            }
            EtlError::MissingConfigError { field } => {
                format!("Provide a value for {}", field)
            }
            EtlError::ZipError(_) | EtlError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            EtlError::SerializationError(_) | EtlError::ProcessingError { .. } => {
                "Re-run with --verbose and inspect the logs".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Output => format!("Could not write results: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn rating_error() -> EtlError {
        let source = "abc".parse::<f64>().unwrap_err();
        EtlError::FieldParseError {
            field: "Rating".to_string(),
            row: 3,
            value: "abc".to_string(),
            source,
        }
    }

    #[test]
    fn test_parse_errors_are_flagged() {
        assert!(rating_error().is_parse_error());
        assert!(!EtlError::MissingConfigError {
            field: "news".to_string()
        }
        .is_parse_error());
    }

    #[test]
    fn test_insufficient_data_is_a_warning() {
        let err = EtlError::InsufficientData {
            message: "no comments".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_field_parse_error_message_names_row() {
        let err = rating_error();
        let text = err.to_string();
        assert!(text.contains("Rating"));
        assert!(text.contains("row 3"));
        assert!(err.recovery_suggestion().contains("row 3"));
        assert_eq!(err.exit_code(), 2);
    }
}
