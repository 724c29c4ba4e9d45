//! Game configuration.

use crate::games::trivia::{BoardShape, DEFAULT_POOL_SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the question source URL.
pub const SOURCE_URL_ENV: &str = "TRIVIA_SOURCE_URL";

/// Configuration for one trivia game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Number of categories on the board (N).
    #[serde(default = "default_categories")]
    categories: usize,

    /// Number of clues in each category (K).
    #[serde(default = "default_clues_per_category")]
    clues_per_category: usize,

    /// How many categories to request from the source before sampling.
    #[serde(default = "default_pool_size")]
    pool_size: usize,

    /// Root URL of the jService-compatible API.
    #[serde(default = "default_source_url")]
    source_url: String,

    /// Fixed RNG seed for reproducible boards.
    #[serde(default)]
    seed: Option<u64>,

    /// Skip pool entries that advertise fewer than K clues.
    #[serde(default)]
    skip_sparse_categories: bool,
}

#[instrument]
fn default_categories() -> usize {
    BoardShape::CLASSIC.categories()
}

#[instrument]
fn default_clues_per_category() -> usize {
    BoardShape::CLASSIC.clues_per_category()
}

#[instrument]
fn default_pool_size() -> usize {
    DEFAULT_POOL_SIZE
}

#[instrument]
fn default_source_url() -> String {
    "https://jservice.io".to_string()
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            clues_per_category: default_clues_per_category(),
            pool_size: default_pool_size(),
            source_url: default_source_url(),
            seed: None,
            skip_sparse_categories: false,
        }
    }
}

impl TriviaConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            categories = config.categories,
            clues_per_category = config.clues_per_category,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `TRIVIA_SOURCE_URL` if it is set.
    #[must_use]
    #[instrument(skip(self))]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(SOURCE_URL_ENV) {
            debug!(url = %url, "Source URL overridden from environment");
            self.source_url = url;
        }
        self
    }

    /// Sets the board shape.
    #[must_use]
    pub fn with_shape(mut self, categories: usize, clues_per_category: usize) -> Self {
        self.categories = categories;
        self.clues_per_category = clues_per_category;
        self
    }

    /// Sets the source URL.
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the configuration for values no board can satisfy.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shape()?;
        if self.pool_size < self.categories {
            return Err(ConfigError::new(format!(
                "pool_size ({}) must be at least categories ({})",
                self.pool_size, self.categories
            )));
        }
        Ok(())
    }

    /// Returns the board shape, or an error if either dimension is zero.
    pub fn shape(&self) -> Result<BoardShape, ConfigError> {
        BoardShape::new(self.categories, self.clues_per_category).ok_or_else(|| {
            ConfigError::new(format!(
                "Board shape must be positive, got {} x {}",
                self.categories, self.clues_per_category
            ))
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
