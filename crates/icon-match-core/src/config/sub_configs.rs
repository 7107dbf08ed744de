//! Sub-configuration structures.
//!
//! Each struct here is one table of the main `Config`.

use serde::{Deserialize, Serialize};

/// Ranking and arbitration settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RankingConfig {
    /// Candidates kept per passage (default: 5)
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Arbitrate so each passage gets a distinct icon (default: true).
    /// When false, every passage simply takes its own best candidate.
    #[serde(default = "default_unique")]
    pub unique: bool,
}

fn default_top_n() -> usize {
    5
}

fn default_unique() -> bool {
    true
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            unique: default_unique(),
        }
    }
}

/// Passage preprocessing settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TextConfig {
    /// Stop words added to the built-in list
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

/// Word-vector source settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Path to a fastText `.vec` text file
    #[serde(default = "default_vectors_path")]
    pub vectors_path: String,

    /// Expected vector dimension (default: 300, fastText `cc.en.300`)
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

fn default_vectors_path() -> String {
    "data/cc.en.300.vec".to_string()
}

fn default_dimension() -> usize {
    300
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            vectors_path: default_vectors_path(),
            dimension: default_dimension(),
        }
    }
}

/// Catalog file settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CatalogConfig {
    /// Path of the JSON catalog written by `build-catalog`
    #[serde(default = "default_catalog_path")]
    pub path: String,

    /// Associations CSV the catalog is built from
    #[serde(default = "default_associations_path")]
    pub associations_path: String,
}

fn default_catalog_path() -> String {
    "data/icon_catalog.json".to_string()
}

fn default_associations_path() -> String {
    "data/icon_associations.csv".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            associations_path: default_associations_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Default level when neither `-v` nor `RUST_LOG` is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
