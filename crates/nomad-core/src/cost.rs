// crates/nomad-core/src/cost.rs

//! # Cost parsing
//!
//! Cities carry their monthly cost as a display string (`"1.8~2.5M"`,
//! `"80-120M"`, `"100M"`). Range filtering and the `cost` sort both need a
//! number, and range filtering works on an ordinal 1..=5 scale rather than
//! raw currency.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{NomadError, Result};

/// Lowest value of the ordinal cost scale.
pub const COST_SCALE_MIN: u8 = 1;
/// Highest value of the ordinal cost scale.
pub const COST_SCALE_MAX: u8 = 5;

/// Returned by [`extract_min_cost`] when the string holds no usable number.
pub const UNKNOWN_COST: f64 = 0.0;

static NUMBER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("cost token pattern is valid"));

/// Parses the first numeric token of a cost string.
///
/// Separators, currency symbols and unit suffixes are ignored. For a range
/// the lower bound is returned.
///
/// ```rust
/// use nomad_core::cost::parse_min_cost;
///
/// assert_eq!(parse_min_cost("80-120M"), Some(80.0));
/// assert_eq!(parse_min_cost("$2.3~3.5M"), Some(2.3));
/// assert_eq!(parse_min_cost("no-data"), None);
/// ```
pub fn parse_min_cost(cost: &str) -> Option<f64> {
    NUMBER_TOKEN
        .find(cost)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Minimum monthly cost, or [`UNKNOWN_COST`] when nothing parses.
///
/// A parsed value of zero is indistinguishable from the sentinel; both mean
/// "unknown" to the filter and the sorter.
pub fn extract_min_cost(cost: &str) -> f64 {
    parse_min_cost(cost).unwrap_or(UNKNOWN_COST)
}

/// Maps a minimum monthly cost onto the 1..=5 ordinal scale.
///
/// Holds four ascending upper bounds. A cost at or below `bounds[0]` is
/// bucket 1, a cost above `bounds[3]` is bucket 5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostBuckets {
    bounds: [f64; 4],
}

impl Default for CostBuckets {
    /// Bounds in millions of KRW per month.
    fn default() -> Self {
        Self {
            bounds: [1.5, 2.0, 2.5, 3.0],
        }
    }
}

impl CostBuckets {
    pub fn new(bounds: [f64; 4]) -> Result<Self> {
        let buckets = Self { bounds };
        buckets.validate()?;
        Ok(buckets)
    }

    pub fn bounds(&self) -> &[f64; 4] {
        &self.bounds
    }

    pub fn validate(&self) -> Result<()> {
        if self.bounds.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(NomadError::Config(format!(
                "cost bucket bounds must be finite and positive: {:?}",
                self.bounds
            )));
        }
        if self.bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(NomadError::Config(format!(
                "cost bucket bounds must be strictly ascending: {:?}",
                self.bounds
            )));
        }
        Ok(())
    }

    /// Bucket for an already extracted cost; `None` for the unknown sentinel.
    pub fn bucket_of(&self, min_cost: f64) -> Option<u8> {
        if !min_cost.is_finite() || min_cost <= UNKNOWN_COST {
            return None;
        }
        let below = self.bounds.iter().filter(|b| **b < min_cost).count() as u8;
        Some(COST_SCALE_MIN + below)
    }

    /// Bucket for a raw cost string.
    pub fn bucket(&self, cost: &str) -> Option<u8> {
        self.bucket_of(extract_min_cost(cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lower_bound_of_range() {
        assert_eq!(extract_min_cost("80-120M"), 80.0);
        assert_eq!(extract_min_cost("2.1~3M"), 2.1);
        assert_eq!(extract_min_cost("1.85~2.5M"), 1.85);
    }

    #[test]
    fn extracts_single_value_and_skips_prefixes() {
        assert_eq!(extract_min_cost("100M"), 100.0);
        assert_eq!(extract_min_cost("  1.8~2.5M"), 1.8);
        assert_eq!(extract_min_cost("₩0.5~1M"), 0.5);
    }

    #[test]
    fn missing_number_yields_sentinel() {
        assert_eq!(extract_min_cost("no-data"), UNKNOWN_COST);
        assert_eq!(extract_min_cost(""), UNKNOWN_COST);
        assert_eq!(parse_min_cost("unknown"), None);
    }

    #[test]
    fn default_buckets_cover_whole_scale() {
        let buckets = CostBuckets::default();
        assert_eq!(buckets.bucket("1.2~1.8M"), Some(1));
        assert_eq!(buckets.bucket("1.5M"), Some(1));
        assert_eq!(buckets.bucket("1.8~2.5M"), Some(2));
        assert_eq!(buckets.bucket("2.5~3.5M"), Some(3));
        assert_eq!(buckets.bucket("2.8M"), Some(4));
        assert_eq!(buckets.bucket("80-120M"), Some(5));
        assert_eq!(buckets.bucket("no-data"), None);
        assert_eq!(buckets.bucket("0M"), None);
    }

    #[test]
    fn rejects_unordered_or_invalid_bounds() {
        assert!(CostBuckets::new([1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(CostBuckets::new([1.0, 3.0, 2.0, 4.0]).is_err());
        assert!(CostBuckets::new([1.0, 1.0, 2.0, 4.0]).is_err());
        assert!(CostBuckets::new([f64::NAN, 1.0, 2.0, 3.0]).is_err());
        assert!(CostBuckets::new([-1.0, 1.0, 2.0, 3.0]).is_err());
    }
}
