//! Chain-wide settings chosen when a root language is created.
//!
//! Settings flow from the root `Language` into every `Term` and `Language`
//! chained after it. They change how results are computed, never what they are.

use serde::Deserialize;
use thiserror::Error;

/// How a work history answers repeated `intentions()` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Replay the whole history on every call.
    #[default]
    Recompute,
    /// Keep each node's materialized result after the first call.
    Memoize,
}

impl CacheMode {
    #[must_use]
    pub fn is_memoized(self) -> bool {
        matches!(self, CacheMode::Memoize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainSettings {
    cache: CacheMode,
}

#[derive(Debug, Error)]
#[error("invalid chain settings: {0}")]
pub struct SettingsError(#[from] toml::de::Error);

impl ChainSettings {
    #[must_use]
    pub const fn new(cache: CacheMode) -> Self {
        Self { cache }
    }

    #[must_use]
    pub fn memoized() -> Self {
        Self::new(CacheMode::Memoize)
    }

    /// Parse settings from a TOML table such as `cache = "memoize"`.
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(raw)?)
    }

    #[must_use]
    pub const fn cache(self) -> CacheMode {
        self.cache
    }
}
