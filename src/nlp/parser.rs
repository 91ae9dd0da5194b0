//! Dependency labeling of cleaned review text
//!
//! `RuleParser` assigns each whitespace token a word class from the
//! [`WordClassModel`] and derives a dependency label from the classes around
//! it. It only distinguishes the roles the normalizer acts on.

use crate::models::{DependencyLabel, Token, WordClass};
use crate::nlp::word_classes::WordClassModel;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

/// Segments text into tokens labeled with their dependency role
pub trait DependencyParser: Send + Sync {
    /// Tokens of `text` in left-to-right order
    fn parse(&self, text: &str) -> Vec<Token>;
}

/// Rule-based parser over a word-class model
#[derive(Debug, Clone)]
pub struct RuleParser {
    model: WordClassModel,
}

impl RuleParser {
    pub fn new(model: WordClassModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &WordClassModel {
        &self.model
    }

    fn label(classes: &[WordClass], i: usize) -> DependencyLabel {
        match classes[i] {
            WordClass::Adjective if Self::modifies_noun(classes, i) => {
                DependencyLabel::AdjectivalModifier
            }
            WordClass::Adjective if Self::follows_copula(classes, i) => {
                DependencyLabel::AdjectivalComplement
            }
            WordClass::Verb if Self::governed_by_predicate(classes, i) => {
                DependencyLabel::OpenClausalComplement
            }
            _ => DependencyLabel::Other,
        }
    }

    /// Adjective followed, possibly through more adjectives, by a noun
    fn modifies_noun(classes: &[WordClass], i: usize) -> bool {
        classes[i + 1..]
            .iter()
            .find(|class| **class != WordClass::Adjective)
            .is_some_and(WordClass::is_nominal)
    }

    fn follows_copula(classes: &[WordClass], i: usize) -> bool {
        Self::head_before(classes, i).is_some_and(|j| classes[j] == WordClass::Copula)
    }

    /// "stopped working", "want to buy", "seems to work"
    fn governed_by_predicate(classes: &[WordClass], i: usize) -> bool {
        match Self::head_before(classes, i) {
            Some(j) if classes[j] == WordClass::Particle => {
                Self::head_before(classes, j).is_some_and(|k| classes[k].is_predicate())
            }
            Some(j) => classes[j] == WordClass::Verb,
            None => false,
        }
    }

    /// Nearest index before `i` that is not an adverb or negation
    fn head_before(classes: &[WordClass], i: usize) -> Option<usize> {
        (0..i)
            .rev()
            .find(|&j| !matches!(classes[j], WordClass::Adverb | WordClass::Negation))
    }
}

impl DependencyParser for RuleParser {
    fn parse(&self, text: &str) -> Vec<Token> {
        let words: Vec<_> = TOKEN_REGEX.find_iter(text).collect();
        let classes: Vec<WordClass> = words
            .iter()
            .map(|word| self.model.classify(word.as_str()))
            .collect();

        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                Token::new(
                    word.as_str(),
                    Self::label(&classes, i),
                    classes[i],
                    word.start(),
                )
            })
            .collect()
    }
}
