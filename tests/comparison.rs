use sentiment_dashboard::pipelines::comparison::{FIRST_LABEL, SECOND_LABEL};
use sentiment_dashboard::pipelines::polarity::PatternPolarityScorer;
use sentiment_dashboard::pipelines::{compare, PolarityScorer};

#[test]
fn tables_are_order_correlated_with_inputs() -> anyhow::Result<()> {
    let scorer = PatternPolarityScorer::new();
    let a = "What a wonderful, happy day!";
    let b = "This is a sad and boring story.";
    let result = compare(&scorer, a, b)?;

    assert_eq!(result.first, scorer.score(a)?);
    assert_eq!(result.second, scorer.score(b)?);

    let labels: Vec<&str> = result.polarity_rows.iter().map(|r| r.label).collect();
    assert_eq!(labels, vec![FIRST_LABEL, SECOND_LABEL]);
    let labels: Vec<&str> = result.subjectivity_rows.iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["Text 1", "Text 2"]);

    assert_eq!(result.polarity_rows[0].value, result.first.polarity);
    assert_eq!(result.polarity_rows[1].value, result.second.polarity);
    assert_eq!(result.subjectivity_rows[0].value, result.first.subjectivity);
    assert_eq!(result.subjectivity_rows[1].value, result.second.subjectivity);
    Ok(())
}

#[test]
fn identical_texts_compare_equal() -> anyhow::Result<()> {
    let result = compare(&PatternPolarityScorer::new(), "good", "good")?;
    assert_eq!(result.first, result.second);
    assert_eq!(result.polarity_rows[0].value, result.polarity_rows[1].value);
    Ok(())
}

#[test]
fn empty_texts_compare_as_neutral() -> anyhow::Result<()> {
    let result = compare(&PatternPolarityScorer::new(), "", "")?;
    assert_eq!(result.first.polarity, 0.0);
    assert_eq!(result.second.subjectivity, 0.0);
    Ok(())
}
