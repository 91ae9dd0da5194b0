//! Data models

mod types;

pub use types::{
    DependencyLabel, PolarityScores, ReviewAnalysis, SentimentLabel, Token, WordClass,
};
