//! Dashboard views: the Home analysis, the comparative analysis and the About page.
//!
//! [`AnalysisContext`] is created once per process and shared by reference (or
//! behind an `Arc`) with every request handler. It owns the loaded emotion
//! model, so the expensive load happens exactly once.

use serde::Serialize;
use std::fmt;

use crate::core::{DashboardConfig, Result};
use crate::pipelines::emotion::EmotionPipelineBuilder;
use crate::pipelines::polarity::PatternPolarityScorer;
use crate::pipelines::tokens::VaderTokenScorer;
use crate::pipelines::{
    compare, ComparisonResult, EmotionClassifier, EmotionResult, PolarityScorer,
    SentenceSentiment, SentimentScore, TokenClassification, TokenScorer,
};

/// The three pages of the dashboard, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Home,
    ComparativeAnalysis,
    About,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::ComparativeAnalysis, View::About];

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::ComparativeAnalysis => "Comparative Analysis",
            View::About => "About",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Content of the About view.
#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub metrics: &'static [(&'static str, &'static str)],
}

pub fn about() -> About {
    About {
        title: "Sentiment Analyzer",
        description: "Analyzes the sentiment of the provided text and reports its polarity, \
                      subjectivity and emotional tone.",
        features: &[
            "Paragraph-level sentiment analysis",
            "Sentence-level sentiment analysis",
            "Token-level sentiment analysis",
            "Emotion detection",
            "Comparative sentiment analysis",
        ],
        metrics: &[
            (
                "Polarity",
                "Whether a text is positive, negative, or neutral, from -1 (very negative) \
                 to 1 (very positive).",
            ),
            (
                "Subjectivity",
                "How much the text expresses personal opinions or emotions, from 0 \
                 (completely objective) to 1 (completely subjective).",
            ),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Positive,
    Negative,
    Neutral,
}

impl Verdict {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Verdict::Positive
        } else if polarity < 0.0 {
            Verdict::Negative
        } else {
            Verdict::Neutral
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::Positive => "Positive",
            Verdict::Negative => "Negative",
            Verdict::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

/// One row of the metric/value table (and of the metric bar chart).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSentiment {
    pub score: SentimentScore,
    pub verdict: Verdict,
}

impl OverallSentiment {
    pub fn new(score: SentimentScore) -> Self {
        Self {
            verdict: Verdict::from_polarity(score.polarity),
            score,
        }
    }

    pub fn metric_rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow {
                metric: "polarity",
                value: self.score.polarity,
            },
            MetricRow {
                metric: "subjectivity",
                value: self.score.subjectivity,
            },
        ]
    }
}

/// Home view result. Each panel succeeds or fails on its own.
#[derive(Debug)]
pub struct HomeReport {
    pub overall: Result<OverallSentiment>,
    pub sentences: Result<Vec<SentenceSentiment>>,
    pub tokens: Result<TokenClassification>,
    pub emotions: Result<EmotionResult>,
}

impl HomeReport {
    pub fn is_complete(&self) -> bool {
        self.overall.is_ok() && self.sentences.is_ok() && self.tokens.is_ok() && self.emotions.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeReport {
    pub comparison: ComparisonResult,
    pub first: OverallSentiment,
    pub second: OverallSentiment,
}

/// Process-scoped analysis components and settings.
pub struct AnalysisContext {
    polarity: Box<dyn PolarityScorer>,
    tokens: Box<dyn TokenScorer>,
    emotion: Box<dyn EmotionClassifier>,
    config: DashboardConfig,
}

impl AnalysisContext {
    pub fn new(
        polarity: Box<dyn PolarityScorer>,
        tokens: Box<dyn TokenScorer>,
        emotion: Box<dyn EmotionClassifier>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            polarity,
            tokens,
            emotion,
            config,
        }
    }

    /// Builds the default components, loading the emotion model eagerly.
    pub async fn load(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let emotion = EmotionPipelineBuilder::from_config(&config.emotion)
            .build()
            .await?;
        tracing::info!("analysis context ready");
        Ok(Self::new(
            Box::new(PatternPolarityScorer::new()),
            Box::new(VaderTokenScorer::new()),
            Box::new(emotion),
            config,
        ))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn polarity(&self) -> &dyn PolarityScorer {
        self.polarity.as_ref()
    }

    pub fn tokens(&self) -> &dyn TokenScorer {
        self.tokens.as_ref()
    }

    pub fn emotion(&self) -> &dyn EmotionClassifier {
        self.emotion.as_ref()
    }

    /// Runs the four Home panels on `text`, one after another.
    pub fn home(&self, text: &str) -> HomeReport {
        let _span = tracing::info_span!("home", chars = text.chars().count()).entered();

        let report = HomeReport {
            overall: self.panel(text, |t| self.polarity.score(t).map(OverallSentiment::new)),
            sentences: self.panel(text, |t| self.polarity.score_sentences(t)),
            tokens: self.panel(text, |t| self.tokens.score_tokens(t)),
            emotions: self.panel(text, |t| self.emotion.classify(t)),
        };

        if !report.is_complete() {
            tracing::warn!("home view rendered with failed panels");
        }
        report
    }

    /// Runs the comparative view on two texts.
    pub fn compare(&self, first: &str, second: &str) -> Result<ComparativeReport> {
        let _span = tracing::info_span!("compare").entered();
        self.config.check_input(first)?;
        self.config.check_input(second)?;

        let comparison = compare(self.polarity.as_ref(), first, second)?;
        Ok(ComparativeReport {
            first: OverallSentiment::new(comparison.first),
            second: OverallSentiment::new(comparison.second),
            comparison,
        })
    }

    fn panel<T>(&self, text: &str, run: impl FnOnce(&str) -> Result<T>) -> Result<T> {
        self.config.check_input(text)?;
        run(text).inspect_err(|err| tracing::warn!(error = %err, "panel failed"))
    }
}

impl fmt::Debug for AnalysisContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
