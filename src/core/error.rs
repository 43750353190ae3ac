use thiserror::Error;

/// Error type returned by every fallible analysis in the crate.
#[derive(Debug, Error)]
pub enum DashboardError {
    // Model loading
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Invalid model format: {0}")]
    ModelFormat(String),

    // Inference
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Classification failed: {0}")]
    Classification(String),

    // Network/Download
    #[error("Download failed: {0}")]
    Download(String),

    // Device
    #[error("Device error: {0}")]
    Device(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The submitted text exceeds the configured `max_input_chars`.
    #[error("Input too long: {len} characters (limit {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    // Pass-through from dependencies
    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<hf_hub::api::sync::ApiError> for DashboardError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        DashboardError::Download(value.to_string())
    }
}

impl From<tokio::task::JoinError> for DashboardError {
    fn from(value: tokio::task::JoinError) -> Self {
        DashboardError::Unexpected(format!("model loader task failed: {value}"))
    }
}
