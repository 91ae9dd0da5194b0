//! # Review Sentiment
//!
//! Classifies a short product review as positive, negative or neutral.
//!
//! ## Modules
//!
//! - `nlp` - Cleaning, rule-based dependency parsing, negation marking
//! - `sentiment` - Polarity scoring and three-way classification
//! - `pipeline` - Normalizer → Classifier, model bootstrap
//! - `web` - Form page and JSON endpoint
//! - `models` - Data types
//! - `config` - Configuration files
//!
//! ## Example Usage
//!
//! ```no_run
//! use review_sentiment::{AppConfig, ReviewPipeline, SentimentLabel};
//!
//! let pipeline = ReviewPipeline::load(&AppConfig::default()).unwrap();
//! assert_eq!(pipeline.classify_review("I love this product"), SentimentLabel::Positive);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod web;

pub use config::{load_config, AppConfig};
pub use error::{Error, Result};
pub use models::{DependencyLabel, PolarityScores, ReviewAnalysis, SentimentLabel, Token, WordClass};
pub use nlp::{DependencyParser, MarkingStrategy, Normalizer, RuleParser, WordClassModel};
pub use pipeline::ReviewPipeline;
pub use sentiment::{Classifier, PolarityScorer, VaderScorer};

/// Prefix the normalizer puts in front of a negated token (`good` becomes
/// `neg_good`).
///
/// This is the contract between [`Normalizer`] and the scorer behind
/// [`Classifier`]: marking changes a score only if the scorer's lexicon has
/// entries for marked forms. The stock VADER lexicon has none, so a marked
/// word scores zero. [`Classifier::marker_coverage`] reports which marked
/// forms a scorer knows.
pub const NEGATION_MARKER: &str = "neg_";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
