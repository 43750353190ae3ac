use sentiment_dashboard::pipelines::polarity::PatternPolarityScorer;
use sentiment_dashboard::pipelines::PolarityScorer;

#[test]
fn scores_stay_in_range() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let texts = [
        "",
        "   ",
        "Absolutely perfect!!! Incredibly wonderful!!!",
        "the worst, most horrible, awful, disgusting thing ever!!!",
        "not not not bad",
        "It is a table.",
        "Quite slightly extremely very really good",
        "😀 🙃 ??? ...",
    ];
    for text in texts {
        let score = scorer.score(text)?;
        assert!((-1.0..=1.0).contains(&score.polarity), "{text}: {score:?}");
        assert!((0.0..=1.0).contains(&score.subjectivity), "{text}: {score:?}");
    }
    Ok(())
}

#[test]
fn mixed_sentences_get_their_own_signs() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let sentences = scorer.score_sentences("I love this! I hate that.")?;

    assert_eq!(sentences.len(), 2);
    assert!(sentences[0].polarity > 0.0);
    assert!(sentences[1].polarity < 0.0);
    Ok(())
}

#[test]
fn sentence_order_matches_source() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let text = "The first one was great. The second one was bad. Was the third fine?";
    let sentences = scorer.score_sentences(text)?;

    let joined: Vec<&str> = sentences.iter().map(|s| s.sentence.as_str()).collect();
    assert_eq!(
        joined,
        vec![
            "The first one was great.",
            "The second one was bad.",
            "Was the third fine?"
        ]
    );
    assert_eq!(joined.join(" "), text);
    Ok(())
}

#[test]
fn blank_input_has_no_sentences_and_neutral_score() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    assert!(scorer.score_sentences("")?.is_empty());
    assert!(scorer.score_sentences(" \n ")?.is_empty());

    let score = scorer.score("")?;
    assert_eq!(score.polarity, 0.0);
    assert_eq!(score.subjectivity, 0.0);
    Ok(())
}

#[test]
fn intensifiers_and_negations_shift_polarity() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let good = scorer.score("good")?.polarity;
    let very_good = scorer.score("very good")?.polarity;
    let not_good = scorer.score("not good")?.polarity;

    assert!(very_good > good);
    assert!(not_good < 0.0);
    Ok(())
}

#[test]
fn scoring_is_idempotent() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let text = "The food was really good, but the service was terribly slow. Never again!";
    assert_eq!(scorer.score(text)?, scorer.score(text)?);
    assert_eq!(scorer.score_sentences(text)?, scorer.score_sentences(text)?);
    Ok(())
}

#[test]
fn lowercase_sentences_get_their_own_signs() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let sentences = scorer.score_sentences("i love this. i hate that.")?;

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].sentence, "i love this.");
    assert!(sentences[0].polarity > 0.0);
    assert!(sentences[1].polarity < 0.0);
    Ok(())
}

#[test]
fn curly_apostrophe_contractions_negate() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let straight = scorer.score("This isn't good")?;
    let curly = scorer.score("This isn\u{2019}t good")?;

    assert!(curly.polarity < 0.0);
    assert_eq!(straight, curly);
    Ok(())
}
