use sentiment_dashboard::pipelines::tokens::{Bucket, VaderTokenScorer};
use sentiment_dashboard::pipelines::TokenScorer;

#[test]
fn empty_text_gives_empty_buckets() -> anyhow::Result<()> {
    let scorer = VaderTokenScorer::new();
    for text in ["", "   ", "\n\t"] {
        let result = scorer.score_tokens(text)?;
        assert!(result.positives.is_empty());
        assert!(result.negatives.is_empty());
        assert!(result.neutral.is_empty());
    }
    Ok(())
}

#[test]
fn good_bad_the_land_in_their_buckets() -> anyhow::Result<()> {
    let result = VaderTokenScorer::new().score_tokens("good bad the")?;

    assert_eq!(result.positives.len(), 1);
    assert_eq!(result.positives[0].token, "good");
    assert_eq!(result.negatives.len(), 1);
    assert_eq!(result.negatives[0].token, "bad");
    assert_eq!(result.neutral, vec!["the".to_string()]);
    Ok(())
}

#[test]
fn every_occurrence_lands_in_exactly_one_bucket() -> anyhow::Result<()> {
    let scorer = VaderTokenScorer::new();
    let text = "Great great GREAT food, awful service, the end :) meh... no no";
    let result = scorer.score_tokens(text)?;

    assert_eq!(result.len(), text.split_whitespace().count());
    for entry in &result.positives {
        assert_eq!(Bucket::of(entry.score), Bucket::Positive);
        assert_eq!(scorer.compound(&entry.token), entry.score);
    }
    for entry in &result.negatives {
        assert_eq!(Bucket::of(entry.score), Bucket::Negative);
    }
    for token in &result.neutral {
        assert_eq!(Bucket::of(scorer.compound(token)), Bucket::Neutral);
    }
    Ok(())
}

#[test]
fn repeated_tokens_are_recorded_per_occurrence() -> anyhow::Result<()> {
    let result = VaderTokenScorer::new().score_tokens("love love hate")?;
    let loves: Vec<_> = result
        .positives
        .iter()
        .filter(|t| t.token == "love")
        .collect();
    assert_eq!(loves.len(), 2);
    assert_eq!(loves[0].score, loves[1].score);
    Ok(())
}

#[test]
fn tokens_keep_their_punctuation() -> anyhow::Result<()> {
    let result = VaderTokenScorer::new().score_tokens("wonderful!! terrible...")?;
    assert_eq!(result.positives[0].token, "wonderful!!");
    assert_eq!(result.negatives[0].token, "terrible...");
    Ok(())
}

#[test]
fn token_scoring_is_idempotent() -> anyhow::Result<()> {
    let scorer = VaderTokenScorer::new();
    let text = "sad happy sad okay whatever";
    assert_eq!(scorer.score_tokens(text)?, scorer.score_tokens(text)?);
    Ok(())
}
