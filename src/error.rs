//! Error types for the review sentiment library
//!
//! Classification itself never fails. Everything here belongs to startup:
//! loading configuration, loading the parser model, binding the server.

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading a model or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in a word-class model
    #[error("Word-class model, line {line}: {message}")]
    ModelParse { line: usize, message: String },

    /// Word-class model had no entries
    #[error("Word-class model is empty")]
    EmptyModel,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Config file extension not recognised
    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(String),

    /// Web server failed to start or stopped with an error
    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Errors raised while loading the parser model or scorer lexicon
    pub fn is_model_error(&self) -> bool {
        matches!(self, Error::ModelParse { .. } | Error::EmptyModel)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
