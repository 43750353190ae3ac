//! Side-by-side polarity/subjectivity of two texts.

use serde::Serialize;

use super::{PolarityScorer, SentimentScore};
use crate::core::Result;

pub const FIRST_LABEL: &str = "Text 1";
pub const SECOND_LABEL: &str = "Text 2";

/// One bar of a comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: &'static str,
    pub value: f64,
}

/// Scores of two texts plus chart-ready rows, first text first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub first: SentimentScore,
    pub second: SentimentScore,
    pub polarity_rows: Vec<ChartRow>,
    pub subjectivity_rows: Vec<ChartRow>,
}

impl ComparisonResult {
    pub fn new(first: SentimentScore, second: SentimentScore) -> Self {
        let rows = |value: fn(&SentimentScore) -> f64| {
            vec![
                ChartRow {
                    label: FIRST_LABEL,
                    value: value(&first),
                },
                ChartRow {
                    label: SECOND_LABEL,
                    value: value(&second),
                },
            ]
        };
        let polarity_rows = rows(|s| s.polarity);
        let subjectivity_rows = rows(|s| s.subjectivity);

        Self {
            first,
            second,
            polarity_rows,
            subjectivity_rows,
        }
    }
}

/// Scores `first` and `second` independently with `scorer`.
///
/// No difference or ranking is computed; the result only juxtaposes the two.
pub fn compare<S>(scorer: &S, first: &str, second: &str) -> Result<ComparisonResult>
where
    S: PolarityScorer + ?Sized,
{
    let a = scorer.score(first)?;
    let b = scorer.score(second)?;
    Ok(ComparisonResult::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::polarity::PatternPolarityScorer;

    #[test]
    fn rows_follow_argument_order() {
        let result = compare(&PatternPolarityScorer, "a great film", "a terrible film").unwrap();
        assert_eq!(result.polarity_rows[0].label, FIRST_LABEL);
        assert_eq!(result.polarity_rows[1].label, SECOND_LABEL);
        assert_eq!(result.polarity_rows[0].value, result.first.polarity);
        assert_eq!(result.subjectivity_rows[1].value, result.second.subjectivity);
        assert!(result.first.polarity > 0.0);
        assert!(result.second.polarity < 0.0);

        let swapped = compare(&PatternPolarityScorer, "a terrible film", "a great film").unwrap();
        assert_eq!(swapped.first, result.second);
        assert_eq!(swapped.second, result.first);
    }
}
