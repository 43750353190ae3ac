use tokenizers::Tokenizer;

use super::pipeline::EmotionScore;
use crate::core::Result;

pub trait EmotionModel {
    type Options: std::fmt::Debug + Clone + Send + 'static;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Scores every label the model knows, highest score first.
    fn predict_scores(&self, tokenizer: &Tokenizer, text: &str) -> Result<Vec<EmotionScore>>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
