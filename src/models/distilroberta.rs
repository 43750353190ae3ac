//! DistilRoBERTa sequence classifier for English emotion detection.
//!
//! The network is Candle's RoBERTa-family encoder with a classification head;
//! this module downloads the hub assets, maps `id2label` and turns logits into
//! ranked [`EmotionScore`]s.

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::xlm_roberta::{Config, XLMRobertaForSequenceClassification};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::core::config::{DEFAULT_EMOTION_MODEL, DEFAULT_TOKENIZER_REPO};
use crate::core::{DashboardError, EmotionModelConfig, Result};
use crate::pipelines::emotion::{EmotionModel, EmotionScore};
use crate::pipelines::utils::{HfLoader, TokenizerLoader};

/// Longest input the position embeddings accept, special tokens included.
const MAX_SEQUENCE_LENGTH: usize = 512;

/// Hub location of a classification model and its tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubModelOptions {
    pub model_id: String,
    pub revision: String,
    pub tokenizer_repo: String,
}

impl Default for HubModelOptions {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_EMOTION_MODEL.to_string(),
            revision: "main".to_string(),
            tokenizer_repo: DEFAULT_TOKENIZER_REPO.to_string(),
        }
    }
}

impl From<&EmotionModelConfig> for HubModelOptions {
    fn from(config: &EmotionModelConfig) -> Self {
        Self {
            model_id: config.model_id.clone(),
            revision: config.revision.clone(),
            tokenizer_repo: config.tokenizer_repo.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
}

pub struct DistilRobertaEmotionModel {
    model: XLMRobertaForSequenceClassification,
    device: Device,
    labels: Vec<String>,
}

impl DistilRobertaEmotionModel {
    pub fn new(options: HubModelOptions, device: Device) -> Result<Self> {
        let config_path = HfLoader::new(&options.model_id, "config.json")
            .with_revision(&options.revision)
            .load()?;
        let weights_path = weights_file(&options)?;

        let config_content = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&config_content).map_err(|e| {
            DashboardError::ModelFormat(format!("failed to parse model config: {e}"))
        })?;
        let class_cfg: ClassifierConfigJson = serde_json::from_str(&config_content)?;
        let labels = labels_in_order(class_cfg.id2label)?;

        let vb = if weights_path.extension().is_some_and(|ext| ext == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? }
        } else {
            VarBuilder::from_pth(&weights_path, DType::F32, &device)?
        };

        let model = XLMRobertaForSequenceClassification::new(labels.len(), &config, vb)?;
        tracing::info!(model = %options.model_id, labels = labels.len(), "emotion model ready");

        Ok(Self {
            model,
            device,
            labels,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn predict_scores(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<EmotionScore>> {
        let encoding = tokenizer.encode(text, true).map_err(|e| {
            DashboardError::Tokenization(format!(
                "Tokenization failed on '{}': {}",
                &text.chars().take(50).collect::<String>(),
                e
            ))
        })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        let logits = self
            .model
            .forward(&input_ids, &attention_mask, &token_type_ids)?;
        let probs = softmax(&logits, D::Minus1)?
            .squeeze(0)?
            .to_dtype(DType::F32)?
            .to_vec1::<f32>()?;

        if probs.len() != self.labels.len() {
            return Err(DashboardError::Classification(format!(
                "model returned {} scores for {} labels",
                probs.len(),
                self.labels.len()
            )));
        }

        Ok(rank(&self.labels, &probs))
    }
}

impl EmotionModel for DistilRobertaEmotionModel {
    type Options = HubModelOptions;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        DistilRobertaEmotionModel::new(options, device)
    }

    fn predict_scores(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<EmotionScore>> {
        self.predict_scores(tokenizer, text)
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        TokenizerLoader::new(&options.model_id, &options.revision)
            .fallback_repo(&options.tokenizer_repo)
            .truncate_to(MAX_SEQUENCE_LENGTH)
            .load()
    }

    fn device(&self) -> &Device {
        self.device()
    }
}

fn weights_file(options: &HubModelOptions) -> Result<PathBuf> {
    let safetensors = HfLoader::new(&options.model_id, "model.safetensors")
        .with_revision(&options.revision)
        .load();
    match safetensors {
        Ok(path) => Ok(path),
        Err(_) => HfLoader::new(&options.model_id, "pytorch_model.bin")
            .with_revision(&options.revision)
            .load()
            .map_err(|e| {
                DashboardError::ModelNotFound(format!(
                    "{}: expected `model.safetensors` or `pytorch_model.bin` ({e})",
                    options.model_id
                ))
            }),
    }
}

/// Orders `id2label` by class id; ids must be exactly `0..n`.
fn labels_in_order(id2label: HashMap<String, String>) -> Result<Vec<String>> {
    if id2label.is_empty() {
        return Err(DashboardError::ModelFormat(
            "config.json has no id2label mapping".into(),
        ));
    }

    let mut labels: Vec<Option<String>> = vec![None; id2label.len()];
    for (id, label) in id2label {
        let index: usize = id
            .parse()
            .map_err(|_| DashboardError::ModelFormat(format!("non-numeric label id '{id}'")))?;
        let slot = labels.get_mut(index).ok_or_else(|| {
            DashboardError::ModelFormat(format!("label id {index} out of range"))
        })?;
        *slot = Some(label);
    }

    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            label.ok_or_else(|| DashboardError::ModelFormat(format!("missing label for id {i}")))
        })
        .collect()
}

fn rank(labels: &[String], probs: &[f32]) -> Vec<EmotionScore> {
    let mut scores: Vec<EmotionScore> = labels
        .iter()
        .zip(probs)
        .map(|(label, &score)| EmotionScore {
            label: label.clone(),
            score,
        })
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id2label(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, label)| (id.to_string(), label.to_string()))
            .collect()
    }

    #[test]
    fn labels_follow_class_ids() {
        let labels =
            labels_in_order(id2label(&[("2", "fear"), ("0", "anger"), ("1", "disgust")])).unwrap();
        assert_eq!(labels, vec!["anger", "disgust", "fear"]);
    }

    #[test]
    fn gaps_in_label_ids_are_rejected() {
        let err = labels_in_order(id2label(&[("0", "anger"), ("2", "fear")])).unwrap_err();
        assert!(matches!(err, DashboardError::ModelFormat(_)));
        let err = labels_in_order(id2label(&[("x", "anger")])).unwrap_err();
        assert!(matches!(err, DashboardError::ModelFormat(_)));
        assert!(labels_in_order(HashMap::new()).is_err());
    }

    #[test]
    fn rank_sorts_descending() {
        let labels = vec!["anger".to_string(), "joy".to_string(), "fear".to_string()];
        let ranked = rank(&labels, &[0.2, 0.7, 0.1]);
        let order: Vec<&str> = ranked.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(order, vec!["joy", "anger", "fear"]);
        assert_eq!(ranked[0].score, 0.7);
    }

    #[test]
    fn options_follow_config() {
        let config = EmotionModelConfig {
            model_id: "org/model".into(),
            revision: "v1".into(),
            ..Default::default()
        };
        let options = HubModelOptions::from(&config);
        assert_eq!(options.model_id, "org/model");
        assert_eq!(options.revision, "v1");
        assert_eq!(options.tokenizer_repo, DEFAULT_TOKENIZER_REPO);
    }
}
