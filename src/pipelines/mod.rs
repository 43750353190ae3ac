// Pipeline modules organized by functionality
pub mod comparison;
pub mod emotion;
pub mod polarity;
pub mod tokens;
pub mod utils;

use crate::core::Result;

pub use comparison::{compare, ChartRow, ComparisonResult};
pub use emotion::{EmotionResult, EmotionScore};
pub use polarity::{SentenceSentiment, SentimentScore};
pub use tokens::{TokenClassification, TokenScore};

/// Whole-text and per-sentence polarity/subjectivity scoring.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentScore>;

    /// Splits `text` into sentences and scores each one independently, in source order.
    fn score_sentences(&self, text: &str) -> Result<Vec<SentenceSentiment>>;
}

/// Per-token sentiment bucketing.
pub trait TokenScorer: Send + Sync {
    fn score_tokens(&self, text: &str) -> Result<TokenClassification>;
}

/// Pretrained emotion classification over a whole text.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<EmotionResult>;
}
