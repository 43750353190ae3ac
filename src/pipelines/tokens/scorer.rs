use super::lexicon;
use super::{Bucket, TokenClassification, TokenScore};
use crate::core::Result;
use crate::pipelines::TokenScorer;

/// Normalisation constant approximating the maximum expected valence sum.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_BOOST: f64 = 0.96;

/// Valence-lexicon token scorer.
///
/// Every whitespace-delimited token is scored on its own, without context, and
/// bucketed by its compound score.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderTokenScorer;

impl VaderTokenScorer {
    pub fn new() -> Self {
        Self
    }

    /// Context-free compound score of a single token, in `[-1, 1]`, rounded to 4 decimals.
    pub fn compound(&self, token: &str) -> f64 {
        let word = strip_punctuation(token).to_lowercase();
        let valence = match lexicon::valence(&word) {
            Some(v) => v,
            None => return 0.0,
        };

        let emphasis = punctuation_emphasis(token);
        let sum = if valence > 0.0 {
            valence + emphasis
        } else {
            valence - emphasis
        };

        round4(normalize(sum))
    }
}

impl TokenScorer for VaderTokenScorer {
    fn score_tokens(&self, text: &str) -> Result<TokenClassification> {
        let mut classification = TokenClassification::default();
        for token in text.split_whitespace() {
            let score = self.compound(token);
            classification.push(token, score);
        }
        tracing::debug!(
            positives = classification.positives.len(),
            negatives = classification.negatives.len(),
            neutral = classification.neutral.len(),
            "scored tokens"
        );
        Ok(classification)
    }
}

impl TokenClassification {
    fn push(&mut self, token: &str, score: f64) {
        match Bucket::of(score) {
            Bucket::Positive => self.positives.push(TokenScore::new(token, score)),
            Bucket::Negative => self.negatives.push(TokenScore::new(token, score)),
            Bucket::Neutral => self.neutral.push(token.to_string()),
        }
    }
}

/// Strips surrounding punctuation unless that leaves two characters or fewer,
/// which keeps emoticons like `:)` intact.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn punctuation_emphasis(token: &str) -> f64 {
    let exclamations = token.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = token.matches('?').count();

    let question_boost = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_BOOST,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_boost
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_matches_reference_values() {
        let scorer = VaderTokenScorer;
        assert_eq!(scorer.compound("good"), 0.4404);
        assert_eq!(scorer.compound("bad"), -0.5423);
        assert_eq!(scorer.compound("the"), 0.0);
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_punctuation() {
        let scorer = VaderTokenScorer;
        assert_eq!(scorer.compound("GOOD"), 0.4404);
        assert_eq!(scorer.compound("(good),"), 0.4404);
    }

    #[test]
    fn short_tokens_keep_their_punctuation() {
        let scorer = VaderTokenScorer;
        assert!(scorer.compound(":)") > 0.1);
        assert!(scorer.compound(":(") < -0.1);
        // "ok!" strips to two characters, so the raw token is looked up and not found.
        assert_eq!(scorer.compound("ok!"), 0.0);
    }

    #[test]
    fn exclamations_amplify_in_the_valence_direction() {
        let scorer = VaderTokenScorer;
        assert!(scorer.compound("good!") > scorer.compound("good"));
        assert!(scorer.compound("bad!!") < scorer.compound("bad"));
        assert_eq!(scorer.compound("good!!!!"), scorer.compound("good!!!!!!"));
    }

    #[test]
    fn question_marks_need_more_than_one() {
        let scorer = VaderTokenScorer;
        assert_eq!(scorer.compound("good?"), scorer.compound("good"));
        assert!(scorer.compound("good??") > scorer.compound("good"));
    }

    #[test]
    fn compound_stays_in_range() {
        let scorer = VaderTokenScorer;
        for token in ["kill!!!!", "great!!!!", "hell????", "love"] {
            let c = scorer.compound(token);
            assert!((-1.0..=1.0).contains(&c), "{token}: {c}");
        }
    }
}
