use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{self, is_negation};
use super::sentences::split_sentences;
use super::{SentenceSentiment, SentimentScore};
use crate::core::Result;
use crate::pipelines::PolarityScorer;

static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*|[^\s\p{L}\p{N}]").expect("valid word pattern")
});

/// Polarity multiplier applied to a negated assessment ("not good" is only slightly bad).
const NEGATION_FACTOR: f64 = -0.5;
/// Boost applied to the previous assessment by each exclamation mark.
const EXCLAMATION_BOOST: f64 = 1.25;

#[derive(Debug, Clone, PartialEq)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

impl Assessment {
    fn final_polarity(&self) -> f64 {
        if self.negated {
            self.polarity * NEGATION_FACTOR
        } else {
            self.polarity
        }
    }
}

/// Lexicon-based polarity and subjectivity scorer.
///
/// Lexicon words form assessments; intensifying adverbs scale the word that
/// follows, negations flip it, and exclamation marks boost it. The text score is
/// the mean over all assessments, or zero when none is found.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternPolarityScorer;

impl PatternPolarityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn sentiment(&self, text: &str) -> SentimentScore {
        let assessments = assess(text);
        if assessments.is_empty() {
            return SentimentScore::neutral();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(Assessment::final_polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

        SentimentScore::new(polarity, subjectivity)
    }
}

impl PolarityScorer for PatternPolarityScorer {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        Ok(self.sentiment(text))
    }

    fn score_sentences(&self, text: &str) -> Result<Vec<SentenceSentiment>> {
        let sentences: Vec<SentenceSentiment> = split_sentences(text)
            .into_iter()
            .map(|sentence| {
                let score = self.sentiment(sentence);
                SentenceSentiment {
                    sentence: sentence.to_string(),
                    polarity: score.polarity,
                    subjectivity: score.subjectivity,
                }
            })
            .collect();
        tracing::debug!(sentences = sentences.len(), "scored sentences");
        Ok(sentences)
    }
}

fn assess(text: &str) -> Vec<Assessment> {
    let mut assessments: Vec<Assessment> = Vec::new();
    let mut modifier = false;
    let mut negation = false;

    for token in WORD_RE.find_iter(text) {
        let word = token.as_str().to_lowercase().replace('’', "'");

        if let Some(entry) = lexicon::lookup(&word) {
            match assessments.last_mut() {
                // "really good": the modifier's assessment takes the word's values, scaled.
                Some(last) if modifier => {
                    last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                    last.subjectivity = (entry.subjectivity * last.intensity).clamp(0.0, 1.0);
                    last.intensity = entry.intensity;
                }
                _ => assessments.push(Assessment {
                    polarity: entry.polarity,
                    subjectivity: entry.subjectivity,
                    intensity: entry.intensity,
                    negated: false,
                }),
            }
            modifier = entry.modifier;

            if negation {
                if let Some(last) = assessments.last_mut() {
                    last.intensity = 1.0 / last.intensity;
                    last.negated = true;
                }
            }
            negation = is_negation(&word);
            continue;
        }

        if is_negation(&word) {
            negation = true;
        } else if negation && word.trim_matches('\'').chars().count() > 1 {
            // Negation survives single letters ("not a good idea").
            negation = false;
        }

        if modifier && word.chars().count() > 2 {
            modifier = false;
        }

        if word == "!" {
            if let Some(last) = assessments.last_mut() {
                last.polarity = (last.polarity * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
            }
        }
    }

    assessments
}
