pub mod core;
pub mod dashboard;
pub mod models;
pub mod pipelines;

// Re-export core types
pub use crate::core::{DashboardConfig, DashboardError, Result};

// Re-export the capability traits and their default implementations
pub use pipelines::emotion::{EmotionPipeline, EmotionPipelineBuilder};
pub use pipelines::polarity::PatternPolarityScorer;
pub use pipelines::tokens::VaderTokenScorer;
pub use pipelines::{EmotionClassifier, PolarityScorer, TokenScorer};

pub use dashboard::{AnalysisContext, ComparativeReport, HomeReport, View};
