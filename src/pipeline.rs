//! Review pipeline: Normalizer → Classifier
//!
//! `ReviewPipeline::load` is the process bootstrap for the models. It builds
//! the parser and scorer once and hands them to the normalizer and
//! classifier; a failure here aborts startup.

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{ReviewAnalysis, SentimentLabel};
use crate::nlp::{DependencyParser, Normalizer, RuleParser, WordClassModel};
use crate::sentiment::{Classifier, MarkerCoverage, PolarityScorer, VaderScorer};
use std::sync::Arc;
use tracing::{info, warn};

/// Adjectives probed for marked-form lexicon entries at startup
const COVERAGE_PROBE: &[&str] = &["good", "bad", "great", "happy", "worth", "satisfied"];

/// Normalizer and classifier sharing read-only models
#[derive(Debug, Clone)]
pub struct ReviewPipeline {
    normalizer: Normalizer,
    classifier: Classifier,
}

impl ReviewPipeline {
    /// Assemble a pipeline from existing handles
    pub fn new(normalizer: Normalizer, classifier: Classifier) -> Self {
        Self {
            normalizer,
            classifier,
        }
    }

    /// Build the parser and scorer described by `config`
    pub fn load(config: &AppConfig) -> Result<Self> {
        let model = match &config.parser.word_classes {
            Some(path) => WordClassModel::load(path)?,
            None => WordClassModel::embedded()?,
        };
        let parser: Arc<dyn DependencyParser> = Arc::new(RuleParser::new(model));
        let scorer: Arc<dyn PolarityScorer> = Arc::new(VaderScorer::new());

        let pipeline = Self::new(
            Normalizer::new(parser).with_strategy(config.normalizer.marking),
            Classifier::new(scorer),
        );

        let coverage = pipeline.marker_coverage();
        if coverage.is_inert() {
            warn!(
                probed = ?coverage.missing,
                "Scorer lexicon has no entries for negation-marked words; marking removes polarity instead of inverting it"
            );
        }

        info!(
            scorer = pipeline.classifier.scorer_name(),
            marking = ?config.normalizer.marking,
            "Review pipeline ready"
        );
        Ok(pipeline)
    }

    /// Classify one review
    pub fn classify_review(&self, text: &str) -> SentimentLabel {
        self.analyze(text).label
    }

    /// Classify one review and keep every intermediate result
    pub fn analyze(&self, text: &str) -> ReviewAnalysis {
        let normalized = self.normalizer.normalize_detailed(text);
        let scores = self.classifier.scores(&normalized.text);

        ReviewAnalysis {
            review: text.to_string(),
            cleaned: normalized.cleaned,
            tokens: normalized.tokens,
            marked: normalized.marked,
            normalized: normalized.text,
            scores,
            label: SentimentLabel::from_compound(scores.compound),
        }
    }

    /// Whether the scorer knows the marked forms of common adjectives
    pub fn marker_coverage(&self) -> MarkerCoverage {
        self.classifier.marker_coverage(COVERAGE_PROBE.iter().copied())
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}
