//! Terminal rendition of the sentiment dashboard.
//!
//! ```text
//! cargo run --example dashboard -- home "I love it. The ending was weak."
//! cargo run --example dashboard -- compare "great service" "slow and rude staff"
//! cargo run --example dashboard -- about
//! cargo run --example dashboard -- --config dashboard.json home "..."
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::{bail, Context, Result};
use sentiment_dashboard::dashboard::{about, MetricRow, OverallSentiment};
use sentiment_dashboard::pipelines::ChartRow;
use sentiment_dashboard::{AnalysisContext, DashboardConfig, HomeReport, View};
use tracing_subscriber::EnvFilter;

const BAR_WIDTH: usize = 30;

enum Command {
    Home(String),
    Compare(String, String),
    About,
}

fn parse_args() -> Result<(Option<String>, Command)> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = None;
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        if pos + 1 >= args.len() {
            bail!("--config needs a file path");
        }
        config = Some(args.remove(pos + 1));
        args.remove(pos);
    }

    let command = match args.first().map(String::as_str) {
        Some("home") if args.len() == 2 => Command::Home(args[1].clone()),
        Some("compare") if args.len() == 3 => Command::Compare(args[1].clone(), args[2].clone()),
        Some("about") => Command::About,
        _ => bail!("usage: dashboard [--config FILE] (home <text> | compare <text1> <text2> | about)"),
    };
    Ok((config, command))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (config_path, command) = parse_args()?;
    let config = match config_path {
        Some(path) => DashboardConfig::from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => DashboardConfig::default(),
    };

    match command {
        Command::About => print_about(),
        Command::Home(text) => {
            let ctx = AnalysisContext::load(config).await?;
            print_home(&ctx.home(&text));
        }
        Command::Compare(first, second) => {
            let ctx = AnalysisContext::load(config).await?;
            let report = ctx.compare(&first, &second)?;
            heading(View::ComparativeAnalysis);
            println!("Text 1: {}", describe(&report.first));
            println!("Text 2: {}", describe(&report.second));
            println!("\nPolarity");
            chart(&report.comparison.polarity_rows);
            println!("\nSubjectivity");
            chart(&report.comparison.subjectivity_rows);
        }
    }

    Ok(())
}

fn heading(view: View) {
    println!("\n=== {view} ===");
}

fn describe(overall: &OverallSentiment) -> String {
    format!(
        "{} (polarity {:.2}, subjectivity {:.2})",
        overall.verdict, overall.score.polarity, overall.score.subjectivity
    )
}

fn bar(value: f64) -> String {
    let filled = (value.abs().min(1.0) * BAR_WIDTH as f64).round() as usize;
    let sign = if value < 0.0 { '-' } else { '#' };
    std::iter::repeat(sign).take(filled).collect()
}

fn chart(rows: &[ChartRow]) {
    for row in rows {
        println!("  {:<8} {:>6.2} {}", row.label, row.value, bar(row.value));
    }
}

fn metric_table(rows: &[MetricRow]) {
    println!("  {:<14} {:>8}", "Metric", "Value");
    for row in rows {
        println!("  {:<14} {:>8.3} {}", row.metric, row.value, bar(row.value));
    }
}

fn print_home(report: &HomeReport) {
    heading(View::Home);

    println!("\n-- Overall Sentiment --");
    match &report.overall {
        Ok(overall) => {
            println!("The text is {}", overall.verdict);
            metric_table(&overall.metric_rows());
        }
        Err(e) => println!("  unavailable: {e}"),
    }

    println!("\n-- Sentence-level Sentiment --");
    match &report.sentences {
        Ok(sentences) if sentences.is_empty() => println!("  (no sentences)"),
        Ok(sentences) => {
            for (i, s) in sentences.iter().enumerate() {
                println!(
                    "  {:>3}. {:>6.2} {:>6.2}  {}",
                    i + 1,
                    s.polarity,
                    s.subjectivity,
                    s.sentence
                );
            }
        }
        Err(e) => println!("  unavailable: {e}"),
    }

    println!("\n-- Token-level Sentiment --");
    match &report.tokens {
        Ok(tokens) => {
            println!("  Positive:");
            for t in &tokens.positives {
                println!("    {} ({:.4})", t.token, t.score);
            }
            println!("  Negative:");
            for t in &tokens.negatives {
                println!("    {} ({:.4})", t.token, t.score);
            }
            println!("  Neutral: {}", tokens.neutral.join(" "));
        }
        Err(e) => println!("  unavailable: {e}"),
    }

    println!("\n-- Emotion Detection --");
    match &report.emotions {
        Ok(emotions) => {
            for e in &emotions.scores {
                println!("  {:<10} {:.4}", e.label, e.score);
            }
        }
        Err(e) => println!("  unavailable: {e}"),
    }
}

fn print_about() {
    heading(View::About);
    let page = about();
    println!("{}\n\n{}\n", page.title, page.description);
    println!("Features:");
    for feature in page.features {
        println!("  - {feature}");
    }
    println!("\nMetrics:");
    for (name, text) in page.metrics {
        println!("  {name}: {text}");
    }
}
