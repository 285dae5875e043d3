use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Extraction error: {message}")]
    ExtractionError { message: String },
}

impl VerifyError {
    pub fn extraction(message: impl Into<String>) -> Self {
        VerifyError::ExtractionError {
            message: message.into(),
        }
    }

    /// Transport failures and extraction failures are reported identically
    /// per item; this distinguishes them for the failure row.
    pub fn is_extraction(&self) -> bool {
        matches!(self, VerifyError::ExtractionError { .. })
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
