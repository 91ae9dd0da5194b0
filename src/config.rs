//! Configuration

use crate::error::{Error, Result};
use crate::nlp::MarkingStrategy;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Web server settings
    pub server: ServerSettings,
    /// Dependency parser settings
    pub parser: ParserSettings,
    /// Normalizer settings
    pub normalizer: NormalizerSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Address the web server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                Error::Config(format!(
                    "invalid bind address {}:{}: {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to listen on
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Dependency parser settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Word-class model file; the embedded model is used when unset
    pub word_classes: Option<PathBuf>,
}

/// Normalizer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerSettings {
    /// How negated tokens are located in the text
    pub marking: MarkingStrategy,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Colored output
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

/// Load configuration from a `.toml` or `.json` file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path.as_ref())?;

    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "toml" => Ok(toml::from_str(&content)?),
        "json" => Ok(serde_json::from_str(&content)?),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}
