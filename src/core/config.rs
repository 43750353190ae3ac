use serde::Deserialize;
use std::path::Path;

use super::error::{DashboardError, Result};
use crate::pipelines::utils::DeviceRequest;

/// Hub repository of the default emotion classifier.
pub const DEFAULT_EMOTION_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

/// Repository used for `tokenizer.json` when the model repository ships none.
pub const DEFAULT_TOKENIZER_REPO: &str = "distilbert/distilroberta-base";

/// Device selection as written in a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceChoice {
    /// CUDA device 0 when available, CPU otherwise.
    #[default]
    Auto,
    Cpu,
    Cuda(usize),
}

impl From<DeviceChoice> for DeviceRequest {
    fn from(choice: DeviceChoice) -> Self {
        match choice {
            DeviceChoice::Auto => DeviceRequest::Default,
            DeviceChoice::Cpu => DeviceRequest::Cpu,
            DeviceChoice::Cuda(index) => DeviceRequest::Cuda(index),
        }
    }
}

/// Where and how the emotion classifier is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmotionModelConfig {
    pub model_id: String,
    pub revision: String,
    /// Fallback repository for `tokenizer.json`.
    pub tokenizer_repo: String,
    /// Number of labels returned per classification, highest score first.
    pub top_k: usize,
    pub device: DeviceChoice,
}

impl Default for EmotionModelConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_EMOTION_MODEL.to_string(),
            revision: "main".to_string(),
            tokenizer_repo: DEFAULT_TOKENIZER_REPO.to_string(),
            top_k: 1,
            device: DeviceChoice::Auto,
        }
    }
}

/// Process-wide dashboard settings.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```json
/// { "max_input_chars": 5000, "emotion": { "top_k": 3, "device": "cpu" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub emotion: EmotionModelConfig,
    /// Reject submissions longer than this many characters. `None` accepts any length.
    pub max_input_chars: Option<usize>,
}

impl DashboardConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.emotion.top_k == 0 {
            return Err(DashboardError::Config("emotion.top_k must be at least 1".into()));
        }
        if self.emotion.model_id.trim().is_empty() {
            return Err(DashboardError::Config("emotion.model_id is empty".into()));
        }
        if self.max_input_chars == Some(0) {
            return Err(DashboardError::Config("max_input_chars must be positive".into()));
        }
        Ok(())
    }

    /// Fails with [`DashboardError::InputTooLong`] when `text` exceeds `max_input_chars`.
    pub fn check_input(&self, text: &str) -> Result<()> {
        match self.max_input_chars {
            Some(max) => {
                let len = text.chars().count();
                if len > max {
                    Err(DashboardError::InputTooLong { len, max })
                } else {
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config =
            DashboardConfig::from_json_str(r#"{ "emotion": { "top_k": 3, "device": "cpu" } }"#)
                .unwrap();
        assert_eq!(config.emotion.top_k, 3);
        assert_eq!(config.emotion.device, DeviceChoice::Cpu);
        assert_eq!(config.emotion.model_id, DEFAULT_EMOTION_MODEL);
        assert_eq!(config.max_input_chars, None);
    }

    #[test]
    fn cuda_index_parses() {
        let config =
            DashboardConfig::from_json_str(r#"{ "emotion": { "device": { "cuda": 1 } } }"#)
                .unwrap();
        assert_eq!(config.emotion.device, DeviceChoice::Cuda(1));
    }

    #[test]
    fn zero_top_k_is_rejected() {
        let err = DashboardConfig::from_json_str(r#"{ "emotion": { "top_k": 0 } }"#).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn input_limit_counts_chars() {
        let config = DashboardConfig {
            max_input_chars: Some(3),
            ..Default::default()
        };
        assert!(config.check_input("héé").is_ok());
        assert!(matches!(
            config.check_input("abcd"),
            Err(DashboardError::InputTooLong { len: 4, max: 3 })
        ));
    }
}
