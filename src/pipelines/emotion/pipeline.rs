use serde::Serialize;
use tokenizers::Tokenizer;

use super::model::EmotionModel;
use crate::core::Result;
use crate::pipelines::EmotionClassifier;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f32,
}

/// Classifier output, highest score first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmotionResult {
    pub scores: Vec<EmotionScore>,
}

impl EmotionResult {
    pub fn new(scores: Vec<EmotionScore>) -> Self {
        Self { scores }
    }

    /// The predicted emotion.
    pub fn top(&self) -> Option<&EmotionScore> {
        self.scores.first()
    }
}

pub struct EmotionPipeline<M: EmotionModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) top_k: usize,
}

impl<M: EmotionModel> EmotionPipeline<M> {
    /// Predict the `top_k` most likely emotions for `text`.
    pub fn predict(&self, text: &str) -> Result<EmotionResult> {
        let _span = tracing::debug_span!("emotion", chars = text.chars().count()).entered();
        let mut scores = self.model.predict_scores(&self.tokenizer, text)?;
        scores.truncate(self.top_k);
        Ok(EmotionResult::new(scores))
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl<M> EmotionClassifier for EmotionPipeline<M>
where
    M: EmotionModel + Send + Sync,
{
    fn classify(&self, text: &str) -> Result<EmotionResult> {
        self.predict(text)
    }
}
