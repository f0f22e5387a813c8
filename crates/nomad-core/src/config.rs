// crates/nomad-core/src/config.rs

//! Configuration types for the filtering core.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cost::CostBuckets;
use crate::error::{NomadError, Result};
use crate::region::RegionTable;

static DEFAULT_CONFIG: Lazy<FilterConfig> = Lazy::new(FilterConfig::default);

/// Which city fields the free-text search looks at, besides the name.
///
/// Both are off by default, so search matches the name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFields {
    pub province: bool,
    pub description: bool,
}

/// Tunables that shape how [`crate::FilterParams`] are evaluated.
///
/// None of this is URL state; it is fixed per deployment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Upper bounds of the 1..=5 ordinal cost scale.
    pub cost_buckets: CostBuckets,
    pub search: SearchFields,
    pub regions: RegionTable,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide default configuration.
    pub fn shared() -> &'static FilterConfig {
        &DEFAULT_CONFIG
    }

    pub fn with_cost_buckets(mut self, cost_buckets: CostBuckets) -> Self {
        self.cost_buckets = cost_buckets;
        self
    }

    pub fn with_search_fields(mut self, search: SearchFields) -> Self {
        self.search = search;
        self
    }

    pub fn with_regions(mut self, regions: RegionTable) -> Self {
        self.regions = regions;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.cost_buckets.validate()?;
        self.regions.validate()
    }

    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            NomadError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }
}
