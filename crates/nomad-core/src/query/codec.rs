// crates/nomad-core/src/query/codec.rs

//! Mapping between [`FilterParams`] and flat query keys.
//!
//! | field       | key(s)              | inactive value |
//! |-------------|---------------------|----------------|
//! | search      | `search`            | empty string   |
//! | regions     | `regions` (a,b,c)   | empty set      |
//! | cost_range  | `costMin`,`costMax` | `1`..`5`       |
//! | min_speed   | `speed`             | `0`            |
//! | sort_by     | `sort`              | `overall`      |
//!
//! Decoding is total: every key is read on its own and a missing or bad
//! value only resets that field.

use std::collections::BTreeSet;
use tracing::debug;

use super::QueryString;
use crate::cost::{COST_SCALE_MAX, COST_SCALE_MIN};
use crate::filter::{CostRange, FilterParams, SortKey};

pub const SEARCH_KEY: &str = "search";
pub const REGIONS_KEY: &str = "regions";
pub const COST_MIN_KEY: &str = "costMin";
pub const COST_MAX_KEY: &str = "costMax";
pub const SPEED_KEY: &str = "speed";
pub const SORT_KEY: &str = "sort";

/// Every key owned by the filter codec.
pub const RECOGNIZED_KEYS: [&str; 6] = [
    SEARCH_KEY,
    REGIONS_KEY,
    COST_MIN_KEY,
    COST_MAX_KEY,
    SPEED_KEY,
    SORT_KEY,
];

const REGION_SEPARATOR: char = ',';

/// Reads filter params from a query string.
pub fn decode(query: &QueryString) -> FilterParams {
    let search = query.get(SEARCH_KEY).unwrap_or_default().to_string();

    let regions = query
        .get(REGIONS_KEY)
        .map(split_regions)
        .unwrap_or_default();

    let cost_range = CostRange {
        min: decode_cost_bound(query, COST_MIN_KEY, COST_SCALE_MIN),
        max: decode_cost_bound(query, COST_MAX_KEY, COST_SCALE_MAX),
    };

    let min_speed = match query.get(SPEED_KEY) {
        None => 0,
        Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
            debug!(key = SPEED_KEY, value = raw, "Invalid query value, using default");
            0
        }),
    };

    let sort_by = match query.get(SORT_KEY) {
        None => SortKey::default(),
        Some(raw) => SortKey::from_param(raw).unwrap_or_else(|| {
            debug!(key = SORT_KEY, value = raw, "Unknown sort key, using default");
            SortKey::default()
        }),
    };

    FilterParams {
        search,
        regions,
        cost_range,
        min_speed,
        sort_by,
    }
}

/// Shorthand for `decode(&QueryString::parse(query))`.
pub fn decode_str(query: &str) -> FilterParams {
    decode(&QueryString::parse(query))
}

fn split_regions(raw: &str) -> BTreeSet<String> {
    raw.split(REGION_SEPARATOR)
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_regions(regions: &BTreeSet<String>) -> String {
    let codes: Vec<&str> = regions.iter().map(String::as_str).collect();
    codes.join(",")
}

fn decode_cost_bound(query: &QueryString, key: &str, default: u8) -> u8 {
    let Some(raw) = query.get(key) else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(value) if CostRange::is_valid_bound(value) => value as u8,
        _ => {
            debug!(key, value = raw, "Invalid cost bound, using default");
            default
        }
    }
}

/// Writes every non-default field of `params` into a fresh query string.
pub fn encode(params: &FilterParams) -> QueryString {
    let mut query = QueryString::new();
    if !params.search.is_empty() {
        query.set(SEARCH_KEY, params.search.as_str());
    }
    if !params.regions.is_empty() {
        query.set(REGIONS_KEY, join_regions(&params.regions));
    }
    if params.cost_range != CostRange::full() {
        query.set(COST_MIN_KEY, params.cost_range.min.to_string());
        query.set(COST_MAX_KEY, params.cost_range.max.to_string());
    }
    if params.min_speed != 0 {
        query.set(SPEED_KEY, params.min_speed.to_string());
    }
    if params.sort_by != SortKey::default() {
        query.set(SORT_KEY, params.sort_by.as_str());
    }
    query
}

/// Partial change to the filter state. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub regions: Option<BTreeSet<String>>,
    pub cost_range: Option<CostRange>,
    pub min_speed: Option<u32>,
    pub sort_by: Option<SortKey>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = Some(regions.into_iter().map(Into::into).collect());
        self
    }

    pub fn cost_range(mut self, min: u8, max: u8) -> Self {
        self.cost_range = Some(CostRange::new(min, max));
        self
    }

    pub fn min_speed(mut self, min_speed: u32) -> Self {
        self.min_speed = Some(min_speed);
        self
    }

    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies `update` on top of `current`, returning the new query.
///
/// Fields set to their inactive value delete their key. The cost range is
/// always written as both bounds. Keys the codec does not own are kept.
pub fn apply_update(current: &QueryString, update: &FilterUpdate) -> QueryString {
    let mut query = current.clone();

    if let Some(search) = &update.search {
        if search.is_empty() {
            query.remove(SEARCH_KEY);
        } else {
            query.set(SEARCH_KEY, search.as_str());
        }
    }

    if let Some(regions) = &update.regions {
        if regions.is_empty() {
            query.remove(REGIONS_KEY);
        } else {
            query.set(REGIONS_KEY, join_regions(regions));
        }
    }

    if let Some(range) = update.cost_range {
        query.set(COST_MIN_KEY, range.min.to_string());
        query.set(COST_MAX_KEY, range.max.to_string());
    }

    if let Some(min_speed) = update.min_speed {
        if min_speed == 0 {
            query.remove(SPEED_KEY);
        } else {
            query.set(SPEED_KEY, min_speed.to_string());
        }
    }

    if let Some(sort_by) = update.sort_by {
        query.set(SORT_KEY, sort_by.as_str());
    }

    query
}

/// Removes every recognized key, leaving unrelated keys in place.
pub fn reset(current: &QueryString) -> QueryString {
    let mut query = current.clone();
    for key in RECOGNIZED_KEYS {
        query.remove(key);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_decodes_to_defaults() {
        assert_eq!(decode_str(""), FilterParams::default());
    }

    #[test]
    fn decodes_every_field() {
        let params =
            decode_str("search=seoul&regions=seoul,gangwon&costMin=2&costMax=4&speed=100&sort=cheap");
        assert_eq!(params.search, "seoul");
        assert_eq!(
            params.regions.iter().map(String::as_str).collect::<Vec<_>>(),
            ["gangwon", "seoul"]
        );
        assert_eq!(params.cost_range, CostRange::new(2, 4));
        assert_eq!(params.min_speed, 100);
        assert_eq!(params.sort_by, SortKey::Cost);
    }

    #[test]
    fn bad_values_only_reset_their_own_field() {
        let params = decode_str("search=jeju&costMin=abc&costMax=3&speed=fast&sort=popular");
        assert_eq!(params.search, "jeju");
        assert_eq!(params.cost_range, CostRange::new(1, 3));
        assert_eq!(params.min_speed, 0);
        assert_eq!(params.sort_by, SortKey::Overall);
    }

    #[test]
    fn out_of_range_numbers_fall_back() {
        let params = decode_str("costMin=0&costMax=9");
        assert_eq!(params.cost_range, CostRange::full());
        let params = decode_str("speed=-5");
        assert_eq!(params.min_speed, 0);
        let params = decode_str("speed=60.5");
        assert_eq!(params.min_speed, 0);
    }

    #[test]
    fn regions_skip_blank_segments() {
        let params = decode_str("regions=,jeju,,%20seoul%20,");
        assert_eq!(params.regions.len(), 2);
        assert!(params.regions.contains("seoul"));
    }

    #[test]
    fn encode_of_defaults_is_empty() {
        assert!(encode(&FilterParams::default()).is_empty());
    }

    #[test]
    fn update_to_inactive_value_removes_key() {
        let current = QueryString::parse("speed=60&search=busan&page=2");

        let q = apply_update(&current, &FilterUpdate::new().min_speed(0));
        assert!(!q.contains_key(SPEED_KEY));
        assert_eq!(q.get(SEARCH_KEY), Some("busan"));

        let q = apply_update(&current, &FilterUpdate::new().search(""));
        assert!(!q.contains_key(SEARCH_KEY));
        assert_eq!(q.get("page"), Some("2"));

        let q = apply_update(&current, &FilterUpdate::new().regions(Vec::<String>::new()));
        assert!(!q.contains_key(REGIONS_KEY));
    }

    #[test]
    fn cost_range_update_writes_both_bounds() {
        let q = apply_update(&QueryString::new(), &FilterUpdate::new().cost_range(1, 5));
        assert_eq!(q.get(COST_MIN_KEY), Some("1"));
        assert_eq!(q.get(COST_MAX_KEY), Some("5"));
    }

    #[test]
    fn untouched_fields_stay_as_they_were() {
        let current = QueryString::parse("costMin=2&costMax=3&sort=speed");
        let q = apply_update(&current, &FilterUpdate::new().search("jeonju"));
        assert_eq!(q.to_query(), "costMin=2&costMax=3&sort=speed&search=jeonju");
    }

    #[test]
    fn reset_clears_only_recognized_keys() {
        let current = QueryString::parse("search=a&lang=ko&regions=jeju&costMin=2&costMax=3&speed=9&sort=cost");
        let q = reset(&current);
        assert_eq!(q.to_query(), "lang=ko");
        assert_eq!(decode(&q), FilterParams::default());
    }

    #[test]
    fn empty_update_is_identity() {
        let current = QueryString::parse("search=a&x=1");
        assert!(FilterUpdate::new().is_empty());
        assert_eq!(apply_update(&current, &FilterUpdate::new()), current);
    }
}
