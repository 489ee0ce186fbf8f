//! Search configuration.
//!
//! Configuration is loaded from JSON and optionally overridden from the
//! environment, then validated and turned into an immutable
//! [`SearchContext`] that is shared read-only by all token extensions.
//!
//! # Examples
//!
//! ```
//! use geoquery::config::SearchConfig;
//!
//! let config = SearchConfig::from_json_str(
//!     r#"{"name_only_search_frequency_threshold": 50}"#,
//! ).unwrap();
//! let ctx = config.into_context();
//! assert!(ctx.is_rare(49));
//! assert!(!ctx.is_rare(50));
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{GeoQueryError, Result};
use crate::search::context::SearchContext;

/// Environment variable overriding the name-only frequency threshold.
pub const NAME_ONLY_THRESHOLD_ENV: &str = "GEOQUERY_NAME_ONLY_THRESHOLD";

/// Default name-only search frequency threshold.
pub const DEFAULT_NAME_ONLY_THRESHOLD: i64 = 500;

/// Configuration for query interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Names backed by words seen fewer times than this are marked rare.
    ///
    /// Zero or a negative value disables rarity marking.
    pub name_only_search_frequency_threshold: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            name_only_search_frequency_threshold: DEFAULT_NAME_ONLY_THRESHOLD,
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading search configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(NAME_ONLY_THRESHOLD_ENV) {
            self.name_only_search_frequency_threshold =
                value.trim().parse().map_err(|_| {
                    GeoQueryError::config(format!(
                        "{NAME_ONLY_THRESHOLD_ENV} must be an integer, got '{value}'"
                    ))
                })?;
        }
        Ok(self)
    }

    /// Set the name-only search frequency threshold.
    pub fn with_name_only_threshold(mut self, threshold: i64) -> Self {
        self.name_only_search_frequency_threshold = threshold;
        self
    }

    /// Validate the configuration.
    ///
    /// Out-of-range thresholds are not rejected; they are clamped by
    /// [`SearchConfig::into_context`]. This reports them so callers can
    /// surface the problem.
    pub fn validate(&self) -> Result<()> {
        if self.name_only_search_frequency_threshold < 0 {
            return Err(GeoQueryError::config(format!(
                "name_only_search_frequency_threshold must not be negative, got {}",
                self.name_only_search_frequency_threshold
            )));
        }
        Ok(())
    }

    /// Build the evaluation context, clamping the threshold once.
    pub fn into_context(&self) -> SearchContext {
        let threshold = self.name_only_search_frequency_threshold;
        if threshold < 0 {
            warn!("negative name-only frequency threshold {threshold}, rare name marking disabled");
            return SearchContext::without_rarity();
        }
        SearchContext::new(u32::try_from(threshold).unwrap_or(u32::MAX))
    }
}
