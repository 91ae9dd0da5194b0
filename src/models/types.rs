//! Data types shared by the normalizer, classifier and web layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse part-of-speech class assigned by the parser's word-class model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Adjective,
    Adverb,
    /// do, will, would, can, have (as auxiliary)
    Auxiliary,
    /// Linking verbs: is, seems, looks, feels
    Copula,
    Determiner,
    Noun,
    Pronoun,
    Preposition,
    Conjunction,
    /// Infinitival "to"
    Particle,
    /// not, never, no, without
    Negation,
    Verb,
    Number,
}

impl WordClass {
    /// Tag used in word-class model files
    pub fn tag(&self) -> &'static str {
        match self {
            WordClass::Adjective => "ADJ",
            WordClass::Adverb => "ADV",
            WordClass::Auxiliary => "AUX",
            WordClass::Copula => "COP",
            WordClass::Determiner => "DET",
            WordClass::Noun => "NOUN",
            WordClass::Pronoun => "PRON",
            WordClass::Preposition => "ADP",
            WordClass::Conjunction => "CCONJ",
            WordClass::Particle => "PART",
            WordClass::Negation => "NEG",
            WordClass::Verb => "VERB",
            WordClass::Number => "NUM",
        }
    }

    /// Content words that can head a noun phrase after an adjective
    pub fn is_nominal(&self) -> bool {
        matches!(self, WordClass::Noun | WordClass::Number)
    }

    /// Verbs that can govern an open clausal complement
    pub fn is_predicate(&self) -> bool {
        matches!(self, WordClass::Verb | WordClass::Adjective | WordClass::Copula)
    }
}

impl FromStr for WordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADJ" => Ok(WordClass::Adjective),
            "ADV" => Ok(WordClass::Adverb),
            "AUX" => Ok(WordClass::Auxiliary),
            "COP" => Ok(WordClass::Copula),
            "DET" => Ok(WordClass::Determiner),
            "NOUN" => Ok(WordClass::Noun),
            "PRON" => Ok(WordClass::Pronoun),
            "ADP" => Ok(WordClass::Preposition),
            "CCONJ" => Ok(WordClass::Conjunction),
            "PART" => Ok(WordClass::Particle),
            "NEG" => Ok(WordClass::Negation),
            "VERB" => Ok(WordClass::Verb),
            "NUM" => Ok(WordClass::Number),
            other => Err(format!("unknown word class `{}`", other)),
        }
    }
}

/// Grammatical role of a token relative to its governing word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyLabel {
    /// Adjective modifying a noun ("good product")
    #[serde(rename = "amod")]
    AdjectivalModifier,
    /// Adjective predicated through a copula ("is good")
    #[serde(rename = "acomp")]
    AdjectivalComplement,
    /// Verb complement without its own subject ("want to buy")
    #[serde(rename = "xcomp")]
    OpenClausalComplement,
    #[serde(rename = "other")]
    Other,
}

impl DependencyLabel {
    pub fn code(&self) -> &'static str {
        match self {
            DependencyLabel::AdjectivalModifier => "amod",
            DependencyLabel::AdjectivalComplement => "acomp",
            DependencyLabel::OpenClausalComplement => "xcomp",
            DependencyLabel::Other => "other",
        }
    }

    /// Labels whose token takes the negation marker when it follows a cue
    pub fn is_negatable(&self) -> bool {
        matches!(
            self,
            DependencyLabel::AdjectivalModifier
                | DependencyLabel::AdjectivalComplement
                | DependencyLabel::OpenClausalComplement
        )
    }
}

impl fmt::Display for DependencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A token of the cleaned review text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Dependency label
    pub dep: DependencyLabel,
    /// Word class the parser used to derive the label
    pub class: WordClass,
    /// Byte offset in the cleaned text
    pub offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, dep: DependencyLabel, class: WordClass, offset: usize) -> Self {
        Self {
            text: text.into(),
            dep,
            class,
            offset,
        }
    }

    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores returned by a polarity scorer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Aggregate polarity in [-1, 1]
    pub compound: f64,
}

impl PolarityScores {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Everything one classification produced, for the CLI and JSON endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Review as submitted
    pub review: String,
    /// Lowercased text with punctuation removed
    pub cleaned: String,
    pub tokens: Vec<Token>,
    /// Indices into `tokens` that received the negation marker
    pub marked: Vec<usize>,
    /// Text handed to the scorer
    pub normalized: String,
    pub scores: PolarityScores,
    pub label: SentimentLabel,
}
