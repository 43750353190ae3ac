//! Polarity and subjectivity scoring for whole texts and single sentences.
//!
//! ## Main Types
//!
//! - [`PatternPolarityScorer`] - Lexicon-based [`PolarityScorer`](crate::pipelines::PolarityScorer)
//! - [`SentimentScore`] - Polarity in `[-1, 1]` and subjectivity in `[0, 1]`
//! - [`SentenceSentiment`] - One scored sentence
//!
//! ## Usage Example
//!
//! ```rust
//! use sentiment_dashboard::pipelines::polarity::PatternPolarityScorer;
//! use sentiment_dashboard::pipelines::PolarityScorer;
//!
//! let scorer = PatternPolarityScorer::new();
//! let score = scorer.score("What a wonderful day!")?;
//! assert!(score.polarity > 0.0);
//!
//! for s in scorer.score_sentences("I love this! I hate that.")? {
//!     println!("{} -> {:.2}", s.sentence, s.polarity);
//! }
//! # Ok::<(), sentiment_dashboard::DashboardError>(())
//! ```

pub mod lexicon;
pub mod scorer;
pub mod sentences;

pub use scorer::PatternPolarityScorer;
pub use sentences::split_sentences;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    /// Negative (-1) to positive (1).
    pub polarity: f64,
    /// Objective (0) to subjective (1).
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Builds a score, clamping both values into their ranges.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceSentiment {
    pub sentence: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentenceSentiment {
    pub fn score(&self) -> SentimentScore {
        SentimentScore {
            polarity: self.polarity,
            subjectivity: self.subjectivity,
        }
    }
}
