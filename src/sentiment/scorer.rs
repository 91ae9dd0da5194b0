//! Polarity scorers
//!
//! The classifier only sees the [`PolarityScorer`] trait. `VaderScorer` is
//! the production implementation, backed by the VADER lexicon and rules from
//! the `vader_sentiment` crate.

use crate::models::PolarityScores;
use std::collections::HashMap;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Scores a string for negative, neutral, positive and compound polarity
pub trait PolarityScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// Short name for logs
    fn name(&self) -> &'static str {
        "scorer"
    }
}

/// VADER lexicon/rule-based scorer
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Build the analyzer. The lexicon is compiled into the crate, so this
    /// only parses it once.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let scores = self.analyzer.polarity_scores(text);
        from_score_map(&scores)
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}

fn from_score_map(scores: &HashMap<&str, f64>) -> PolarityScores {
    let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
    PolarityScores {
        neg: get("neg"),
        neu: get("neu"),
        pos: get("pos"),
        compound: get("compound"),
    }
}
