//! Text normalization
//!
//! Includes:
//! - Cleaning (punctuation removal, case folding)
//! - Word-class model and rule-based dependency parser
//! - Negation marking

mod cleaner;
mod normalizer;
mod parser;
mod word_classes;

pub use cleaner::clean_text;
pub use normalizer::{is_negation_cue, MarkingStrategy, Normalized, Normalizer, NEGATION_CUES};
pub use parser::{DependencyParser, RuleParser};
pub use word_classes::{WordClassModel, DEFAULT_MODEL};
