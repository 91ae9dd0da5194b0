//! Three-way sentiment classification over a polarity scorer

use crate::models::{PolarityScores, SentimentLabel};
use crate::sentiment::scorer::PolarityScorer;
use crate::NEGATION_MARKER;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

/// Compound score at or above which a review is positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound score at or below which a review is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

impl SentimentLabel {
    /// Map a compound score to a label. Both thresholds are inclusive.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Which marked forms the scorer's lexicon actually scores
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerCoverage {
    /// Marked forms with a non-zero compound score
    pub covered: Vec<String>,
    /// Marked forms the scorer treats as unknown
    pub missing: Vec<String>,
}

impl MarkerCoverage {
    /// No probed form carries a lexicon entry, so marking only removes the
    /// word's own polarity
    pub fn is_inert(&self) -> bool {
        self.covered.is_empty()
    }
}

/// Sentiment classifier
#[derive(Clone)]
pub struct Classifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl Classifier {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Label for `text`. Never fails.
    pub fn classify(&self, text: &str) -> SentimentLabel {
        SentimentLabel::from_compound(self.scores(text).compound)
    }

    /// Raw scores for `text`. Blank text scores zero without consulting the
    /// scorer; a panicking scorer also yields zero.
    pub fn scores(&self, text: &str) -> PolarityScores {
        if text.trim().is_empty() {
            return PolarityScores::zero();
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.scorer.polarity_scores(text))) {
            Ok(scores) => scores,
            Err(_) => {
                warn!(
                    scorer = self.scorer.name(),
                    chars = text.chars().count(),
                    "Scorer panicked, treating input as neutral"
                );
                PolarityScores::zero()
            }
        }
    }

    /// Probe the scorer with `neg_<word>` for each word
    pub fn marker_coverage<'a, I>(&self, words: I) -> MarkerCoverage
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut coverage = MarkerCoverage::default();
        for word in words {
            let marked = format!("{}{}", NEGATION_MARKER, word);
            if self.scores(&marked).compound != 0.0 {
                coverage.covered.push(marked);
            } else {
                coverage.missing.push(marked);
            }
        }
        coverage
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("scorer", &self.scorer.name())
            .finish()
    }
}
