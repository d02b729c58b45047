use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid base64 encoding: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("Invalid text encoding: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No file content provided")]
    EmptyInput,

    #[error("No valid MAC address entries found in the file")]
    NoRecordsFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ConvertError::Base64Error(_)
            | ConvertError::InvalidEncoding(_)
            | ConvertError::EmptyInput
            | ConvertError::NoRecordsFound => ErrorCategory::Input,
            ConvertError::CsvError(_) | ConvertError::IoError(_) => ErrorCategory::Output,
            ConvertError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入內容問題，使用者修正檔案後重試即可
            ConvertError::EmptyInput | ConvertError::NoRecordsFound => ErrorSeverity::Medium,
            ConvertError::Base64Error(_) | ConvertError::InvalidEncoding(_) => {
                ErrorSeverity::Medium
            }
            ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ConvertError::CsvError(_) | ConvertError::SerializationError(_) => ErrorSeverity::High,
            ConvertError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether the failure was caused by what the caller sent, as opposed to
    /// something going wrong on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Input)
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::EmptyInput => "Provide a non-empty MAB binding export".to_string(),
            ConvertError::NoRecordsFound => {
                "Check that the file contains lines like '1  001e.0b41.7afd  DYNAMIC  Gi1/0/15'"
                    .to_string()
            }
            ConvertError::Base64Error(_) => {
                "Send the file content as standard base64 text".to_string()
            }
            ConvertError::InvalidEncoding(_) => "Save the export as UTF-8 text".to_string(),
            ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and mapping file".to_string()
            }
            ConvertError::IoError(_) => {
                "Check that the input exists and the output location is writable".to_string()
            }
            ConvertError::CsvError(_) | ConvertError::SerializationError(_) => {
                "Re-run with --verbose and report the log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
            ErrorCategory::Internal => format!("Unexpected failure: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
