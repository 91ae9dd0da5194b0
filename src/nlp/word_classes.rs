//! Word-class model used by the rule-based parser
//!
//! The model is a plain text file, one `word<TAB>CLASS` entry per line.
//! Lines starting with `#` and blank lines are ignored. A word listed twice
//! keeps its last class.

use crate::error::{Error, Result};
use crate::models::WordClass;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Default model shipped with the crate
pub const DEFAULT_MODEL: &str = include_str!("../../resources/word_classes.tsv");

/// Suffixes that mark an unknown word as an adjective
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ful", "ous", "ive", "able", "ible", "less", "ish", "ical", "esque",
];

/// Word → class lookup with suffix fallback for unknown words
#[derive(Debug, Clone)]
pub struct WordClassModel {
    classes: HashMap<String, WordClass>,
}

impl WordClassModel {
    /// The embedded default model
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_MODEL)
    }

    /// Load a model file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let model = Self::parse(&content)?;
        info!(
            path = %path.as_ref().display(),
            entries = model.len(),
            "Loaded word-class model"
        );
        Ok(model)
    }

    /// Parse model text
    pub fn parse(content: &str) -> Result<Self> {
        let mut classes = HashMap::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t').map(str::trim).filter(|f| !f.is_empty());
            let (word, tag) = match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(tag), None) => (word, tag),
                _ => {
                    return Err(Error::ModelParse {
                        line: idx + 1,
                        message: format!("expected `word<TAB>CLASS`, got `{}`", line),
                    })
                }
            };

            let class = tag.parse::<WordClass>().map_err(|message| Error::ModelParse {
                line: idx + 1,
                message,
            })?;

            if let Some(previous) = classes.insert(word.to_lowercase(), class) {
                debug!(word, ?previous, ?class, "Word-class entry replaced");
            }
        }

        if classes.is_empty() {
            return Err(Error::EmptyModel);
        }

        Ok(Self { classes })
    }

    /// Class listed in the model, if any
    pub fn lookup(&self, word: &str) -> Option<WordClass> {
        self.classes.get(word).copied()
    }

    /// Class for any word: model entry first, then shape heuristics
    pub fn classify(&self, word: &str) -> WordClass {
        if let Some(class) = self.lookup(word) {
            return class;
        }
        Self::guess(word)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn guess(word: &str) -> WordClass {
        if word.chars().all(|c| c.is_ascii_digit()) {
            return WordClass::Number;
        }
        if word.len() > 4 && word.ends_with("ly") {
            return WordClass::Adverb;
        }
        if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| word.len() > suffix.len() + 2 && word.ends_with(suffix))
        {
            return WordClass::Adjective;
        }
        if word.len() > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
            return WordClass::Verb;
        }
        WordClass::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_model_loads() {
        let model = WordClassModel::embedded().unwrap();
        assert!(model.len() > 100);
        assert_eq!(model.lookup("good"), Some(WordClass::Adjective));
        assert_eq!(model.lookup("is"), Some(WordClass::Copula));
        assert_eq!(model.lookup("not"), Some(WordClass::Negation));
        assert_eq!(model.lookup("to"), Some(WordClass::Particle));
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let model = WordClassModel::parse("# header\n\ngood\tADJ\n  \nis\tCOP\n").unwrap();
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_parse_reports_line_of_bad_tag() {
        let err = WordClassModel::parse("good\tADJ\nis\tLINK\n").unwrap_err();
        match err {
            Error::ModelParse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("LINK"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_tag() {
        let err = WordClassModel::parse("good\n").unwrap_err();
        assert!(matches!(err, Error::ModelParse { line: 1, .. }));
    }

    #[test]
    fn test_empty_model_is_error() {
        let err = WordClassModel::parse("# nothing here\n").unwrap_err();
        assert!(matches!(err, Error::EmptyModel));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let model = WordClassModel::parse("like\tVERB\nlike\tADP\n").unwrap();
        assert_eq!(model.lookup("like"), Some(WordClass::Preposition));
    }

    #[test]
    fn test_guess_unknown_words() {
        let model = WordClassModel::parse("good\tADJ\n").unwrap();
        assert_eq!(model.classify("42"), WordClass::Number);
        assert_eq!(model.classify("shockingly"), WordClass::Adverb);
        assert_eq!(model.classify("flimsiness"), WordClass::Noun);
        assert_eq!(model.classify("wonderful"), WordClass::Adjective);
        assert_eq!(model.classify("charging"), WordClass::Verb);
        assert_eq!(model.classify("blender"), WordClass::Noun);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.tsv");
        std::fs::write(&path, "sturdy\tADJ\nseems\tCOP\n").unwrap();

        let model = WordClassModel::load(&path).unwrap();
        assert_eq!(model.lookup("sturdy"), Some(WordClass::Adjective));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WordClassModel::load("/definitely/not/here.tsv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
