//! Configuration management for Icon Match.

mod sub_configs;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{CatalogConfig, EmbeddingConfig, LoggingConfig, RankingConfig, TextConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{ICON_MATCH_ENV}.toml (environment-specific)
    /// 3. Environment variables with ICON_MATCH__ prefix, e.g.
    ///    `ICON_MATCH__RANKING__TOP_N=3`
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("ICON_MATCH_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("ICON_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values. Fails on the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ranking.top_n == 0 {
            return Err(CoreError::ConfigError(
                "ranking.top_n must be greater than 0".into(),
            ));
        }

        if self.embedding.dimension == 0 {
            return Err(CoreError::ConfigError(
                "embedding.dimension must be greater than 0".into(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }

        if self
            .text
            .extra_stop_words
            .iter()
            .any(|w| w.trim().is_empty())
        {
            return Err(CoreError::ConfigError(
                "text.extra_stop_words must not contain blank entries".into(),
            ));
        }

        Ok(())
    }
}
