// crates/nomad-core/src/filter/mod.rs

//! # City filtering
//!
//! [`FilterParams`] is the structured form of the filter/sort selection.
//! It is rebuilt from the URL on every read (see [`crate::query`]) and fed to
//! [`apply_filters`], which keeps the cities passing every active predicate
//! and sorts them by the selected key.

mod compose;
mod predicate;

pub use compose::{apply_filters, apply_filters_with, sort_cities, CityFilter};
pub use predicate::CityPredicate;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::cost::{COST_SCALE_MAX, COST_SCALE_MIN};

/// Inclusive bounds on the 1..=5 ordinal cost scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u8,
    pub max: u8,
}

impl Default for CostRange {
    fn default() -> Self {
        Self::full()
    }
}

impl CostRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// The whole scale; imposes no constraint.
    pub const fn full() -> Self {
        Self {
            min: COST_SCALE_MIN,
            max: COST_SCALE_MAX,
        }
    }

    pub fn is_full(&self) -> bool {
        self.min <= COST_SCALE_MIN && self.max >= COST_SCALE_MAX
    }

    pub fn contains(&self, bucket: u8) -> bool {
        (self.min..=self.max).contains(&bucket)
    }

    /// Whether `value` is a legal bound on the scale.
    pub fn is_valid_bound(value: i64) -> bool {
        (i64::from(COST_SCALE_MIN)..=i64::from(COST_SCALE_MAX)).contains(&value)
    }
}

/// The single active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// `overall_score`, highest first.
    #[default]
    Overall,
    /// Minimum monthly cost, cheapest first.
    Cost,
    /// `internet_speed`, fastest first.
    Speed,
    /// `nomads_count`, most first.
    Nomads,
    /// `quality_score`, highest first.
    Quality,
    /// `reviews_count`, most first.
    Reviews,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Overall,
        SortKey::Cost,
        SortKey::Speed,
        SortKey::Nomads,
        SortKey::Quality,
        SortKey::Reviews,
    ];

    /// Canonical query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Overall => "overall",
            SortKey::Cost => "cost",
            SortKey::Speed => "speed",
            SortKey::Nomads => "nomads",
            SortKey::Quality => "quality",
            SortKey::Reviews => "reviews",
        }
    }

    /// Parses a query-string value, accepting the legacy aliases
    /// `cheap`, `fast` and `active`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "overall" => Some(SortKey::Overall),
            "cost" | "cheap" => Some(SortKey::Cost),
            "speed" | "fast" => Some(SortKey::Speed),
            "nomads" | "active" => Some(SortKey::Nomads),
            "quality" => Some(SortKey::Quality),
            "reviews" => Some(SortKey::Reviews),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured filter and sort selection.
///
/// The default value filters nothing and sorts by overall score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterParams {
    /// Free text; empty or whitespace-only means no constraint.
    pub search: String,
    /// Region codes; empty means all regions.
    pub regions: BTreeSet<String>,
    pub cost_range: CostRange,
    /// Minimum internet speed in Mbps; `0` means no constraint.
    pub min_speed: u32,
    pub sort_by: SortKey,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cost_range(mut self, min: u8, max: u8) -> Self {
        self.cost_range = CostRange::new(min, max);
        self
    }

    pub fn with_min_speed(mut self, min_speed: u32) -> Self {
        self.min_speed = min_speed;
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// True when no predicate would exclude anything.
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty()
            && self.regions.is_empty()
            && self.cost_range.is_full()
            && self.min_speed == 0
    }
}
