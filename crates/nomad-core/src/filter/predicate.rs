// crates/nomad-core/src/filter/predicate.rs

//! Single-dimension tests against one city.
//!
//! Each predicate is pure and independent of the others, so the composer can
//! evaluate them in any order. Constructors return `None` for a filter at its
//! inactive default.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use super::{CostRange, FilterParams};
use crate::config::{FilterConfig, SearchFields};
use crate::cost::CostBuckets;
use crate::model::City;
use crate::region::RegionTable;
use crate::text::{contains_folded, fold_key};
use crate::traits::NameMatch;

#[derive(Debug, Clone)]
pub enum CityPredicate<'a> {
    /// Case-insensitive substring on the name (and configured extra fields).
    Search { folded: String, fields: SearchFields },
    /// Province belongs to one of the selected region codes.
    Region {
        codes: &'a BTreeSet<String>,
        table: &'a RegionTable,
    },
    /// Cost bucket inside the range; unknown cost never passes.
    Cost {
        range: CostRange,
        buckets: CostBuckets,
    },
    /// Internet speed at least `min` Mbps.
    Speed { min: u32 },
    /// City id is in an explicit set (favorites, bookmarks).
    Restrict { ids: &'a HashSet<String> },
}

impl<'a> CityPredicate<'a> {
    pub fn search(term: &str, fields: SearchFields) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(Self::Search {
            folded: fold_key(term),
            fields,
        })
    }

    pub fn region(codes: &'a BTreeSet<String>, table: &'a RegionTable) -> Option<Self> {
        if codes.is_empty() {
            return None;
        }
        Some(Self::Region { codes, table })
    }

    pub fn cost(range: CostRange, buckets: CostBuckets) -> Option<Self> {
        if range.is_full() {
            return None;
        }
        Some(Self::Cost { range, buckets })
    }

    pub fn speed(min: u32) -> Option<Self> {
        if min == 0 {
            return None;
        }
        Some(Self::Speed { min })
    }

    pub fn restrict(ids: &'a HashSet<String>) -> Self {
        Self::Restrict { ids }
    }

    /// Active predicates for `params`, numeric comparisons first.
    pub fn from_params(params: &'a FilterParams, config: &'a FilterConfig) -> Vec<Self> {
        [
            Self::speed(params.min_speed),
            Self::cost(params.cost_range, config.cost_buckets),
            Self::region(&params.regions, &config.regions),
            Self::search(&params.search, config.search),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn matches(&self, city: &City) -> bool {
        match self {
            Self::Search { folded, fields } => {
                city.name_contains_folded(folded)
                    || (fields.province && contains_folded(&city.province, folded))
                    || (fields.description && contains_folded(city.description(), folded))
            }
            Self::Region { codes, table } => table.matches(codes, &city.province),
            Self::Cost { range, buckets } => buckets
                .bucket(&city.cost_per_month)
                .is_some_and(|bucket| range.contains(bucket)),
            Self::Speed { min } => city.internet_speed >= f64::from(*min),
            Self::Restrict { ids } => ids.contains(&city.id),
        }
    }
}

impl fmt::Display for CityPredicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search { folded, .. } => write!(f, "search({folded})"),
            Self::Region { codes, .. } => {
                let joined: Vec<&str> = codes.iter().map(String::as_str).collect();
                write!(f, "regions({})", joined.join(","))
            }
            Self::Cost { range, .. } => write!(f, "cost({}..={})", range.min, range.max),
            Self::Speed { min } => write!(f, "speed(>={min})"),
            Self::Restrict { ids } => write!(f, "restrict({} ids)", ids.len()),
        }
    }
}
