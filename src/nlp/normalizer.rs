//! Text normalizer: cleaning, tokenization and negation marking
//!
//! After cleaning and parsing, each negation cue is checked against the token
//! right after it. If that token is an adjectival modifier, adjectival
//! complement or open clausal complement, its text gets [`NEGATION_MARKER`]
//! prepended in the output string. Marking never adds, drops or reorders
//! tokens.

use crate::models::Token;
use crate::nlp::cleaner::clean_text;
use crate::nlp::parser::DependencyParser;
use crate::NEGATION_MARKER;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Words that may invert the polarity of the word after them
pub const NEGATION_CUES: [&str; 4] = ["not", "never", "no", "without"];

pub fn is_negation_cue(word: &str) -> bool {
    NEGATION_CUES.contains(&word)
}

/// How a negated token is located in the working string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkingStrategy {
    /// Mark the first substring match of the token text, searching the
    /// working string (earlier markings included) from the start. An
    /// earlier unrelated occurrence of the same word is marked instead of
    /// the negated one.
    #[default]
    FirstOccurrence,
    /// Mark the token at its own byte offset
    TokenOffset,
}

/// Intermediate results of one normalization
#[derive(Debug, Clone)]
pub struct Normalized {
    pub cleaned: String,
    pub tokens: Vec<Token>,
    /// Indices into `tokens` selected for marking
    pub marked: Vec<usize>,
    /// Final normalized text
    pub text: String,
}

/// Negation-aware text normalizer
#[derive(Clone)]
pub struct Normalizer {
    parser: Arc<dyn DependencyParser>,
    strategy: MarkingStrategy,
}

impl Normalizer {
    pub fn new(parser: Arc<dyn DependencyParser>) -> Self {
        Self {
            parser,
            strategy: MarkingStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: MarkingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> MarkingStrategy {
        self.strategy
    }

    /// Normalize a raw review. Total over all input; `""` maps to `""`.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalize_detailed(raw).text
    }

    /// Normalize and keep the cleaned text, tokens and marked indices
    pub fn normalize_detailed(&self, raw: &str) -> Normalized {
        let cleaned = clean_text(raw);
        let tokens = self.parser.parse(&cleaned);
        let marked = negation_targets(&tokens);

        let text = match self.strategy {
            MarkingStrategy::FirstOccurrence => mark_first_occurrence(&cleaned, &tokens, &marked),
            MarkingStrategy::TokenOffset => mark_at_offsets(&cleaned, &tokens, &marked),
        };

        debug!(
            tokens = tokens.len(),
            marked = marked.len(),
            strategy = ?self.strategy,
            "Normalized review"
        );

        Normalized {
            cleaned,
            tokens,
            marked,
            text,
        }
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

/// Indices of tokens directly after a cue whose label is negatable
fn negation_targets(tokens: &[Token]) -> Vec<usize> {
    tokens
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| is_negation_cue(&pair[0].text) && pair[1].dep.is_negatable())
        .map(|(i, _)| i + 1)
        .collect()
}

fn mark_first_occurrence(cleaned: &str, tokens: &[Token], targets: &[usize]) -> String {
    let mut text = cleaned.to_string();
    for &idx in targets {
        if let Some(pos) = text.find(tokens[idx].text.as_str()) {
            text.insert_str(pos, NEGATION_MARKER);
        }
    }
    text
}

fn mark_at_offsets(cleaned: &str, tokens: &[Token], targets: &[usize]) -> String {
    let mut text = String::with_capacity(cleaned.len() + targets.len() * NEGATION_MARKER.len());
    let mut last = 0;
    // targets ascend, so offsets do too
    for &idx in targets {
        let offset = tokens[idx].offset;
        text.push_str(&cleaned[last..offset]);
        text.push_str(NEGATION_MARKER);
        last = offset;
    }
    text.push_str(&cleaned[last..]);
    text
}
