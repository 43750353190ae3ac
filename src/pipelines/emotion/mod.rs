//! Emotion detection pipeline built on a pretrained text-classification model.
//!
//! ## Main Types
//!
//! - [`EmotionPipeline`] - High-level interface for emotion classification
//! - [`EmotionPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`EmotionModel`] - Trait for emotion model implementations
//! - [`EmotionResult`] - Labels with confidence scores, highest first
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_dashboard::pipelines::emotion::*;
//!
//! #[tokio::main]
//! async fn main() -> sentiment_dashboard::Result<()> {
//!     let pipeline = EmotionPipelineBuilder::distilroberta()
//!         .cpu()
//!         .top_k(3)
//!         .build()
//!         .await?;
//!
//!     let result = pipeline.predict("I can't believe they cancelled the show!")?;
//!     for emotion in &result.scores {
//!         println!("{} ({:.2})", emotion.label, emotion.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::EmotionPipelineBuilder;
pub use model::EmotionModel;
pub use pipeline::{EmotionPipeline, EmotionResult, EmotionScore};
