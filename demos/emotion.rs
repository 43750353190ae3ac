use anyhow::Result;
use sentiment_dashboard::pipelines::emotion::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("Building pipeline...");

    let pipeline = EmotionPipelineBuilder::distilroberta()
        .top_k(3)
        .build()
        .await?;

    println!("Pipeline built successfully.");

    let text = "I can't believe they cancelled my favourite show";

    let result = pipeline.predict(text)?;

    println!("\n=== Emotion Detection Result ===");
    println!("Text: \"{}\"", text);
    for emotion in &result.scores {
        println!("{}: {:.4}", emotion.label, emotion.score);
    }

    Ok(())
}
