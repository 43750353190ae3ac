//! Token-level sentiment.
//!
//! Each whitespace-delimited token is scored independently and placed in one of
//! three buckets using fixed thresholds on its compound score:
//!
//! | compound score        | bucket    |
//! |-----------------------|-----------|
//! | `> 0.1`               | positives |
//! | `<= -0.1`             | negatives |
//! | otherwise             | neutral   |

pub mod lexicon;
pub mod scorer;

pub use scorer::VaderTokenScorer;

use serde::Serialize;

pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Positive,
    Negative,
    Neutral,
}

impl Bucket {
    pub fn of(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Bucket::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Bucket::Negative
        } else {
            Bucket::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenScore {
    pub token: String,
    pub score: f64,
}

impl TokenScore {
    pub fn new(token: &str, score: f64) -> Self {
        Self {
            token: token.to_string(),
            score,
        }
    }
}

/// Tokens partitioned by sentiment, in text order within each bucket.
///
/// Repeated tokens are scored and recorded once per occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenClassification {
    pub positives: Vec<TokenScore>,
    pub negatives: Vec<TokenScore>,
    pub neutral: Vec<String>,
}

impl TokenClassification {
    pub fn is_empty(&self) -> bool {
        self.positives.is_empty() && self.negatives.is_empty() && self.neutral.is_empty()
    }

    /// Total number of token occurrences across all buckets.
    pub fn len(&self) -> usize {
        self.positives.len() + self.negatives.len() + self.neutral.len()
    }
}
