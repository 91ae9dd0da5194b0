//! Sentiment classification
//!
//! - `scorer` - polarity scorer trait and the VADER-backed implementation
//! - `classifier` - compound score thresholds and marker coverage probe

mod classifier;
mod scorer;

pub use classifier::{Classifier, MarkerCoverage, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use scorer::{PolarityScorer, VaderScorer};
