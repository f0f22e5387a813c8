// crates/nomad-core/src/filter/compose.rs

//! Combines the active predicates into one filtering pass followed by a
//! stable sort.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

use super::{CityPredicate, FilterParams, SortKey};
use crate::config::FilterConfig;
use crate::model::City;

/// Filters and sorts cities with the shared default configuration.
///
/// The input is never modified. Cities must pass every active predicate;
/// survivors are sorted by `params.sort_by`, keeping input order for ties.
///
/// ```rust
/// use nomad_core::{apply_filters, City, FilterParams};
///
/// let cities: Vec<City> = Vec::new();
/// assert!(apply_filters(&cities, &FilterParams::default()).is_empty());
/// ```
pub fn apply_filters(cities: &[City], params: &FilterParams) -> Vec<City> {
    CityFilter::new(params).apply(cities)
}

/// [`apply_filters`] with an explicit configuration.
pub fn apply_filters_with(
    cities: &[City],
    params: &FilterParams,
    config: &FilterConfig,
) -> Vec<City> {
    CityFilter::new(params).with_config(config).apply(cities)
}

/// Stable sort of cities by `key`.
pub fn sort_cities<C: Borrow<City>>(cities: &mut [C], key: SortKey) {
    cities.sort_by(|a, b| compare(a.borrow(), b.borrow(), key));
}

fn compare(a: &City, b: &City, key: SortKey) -> Ordering {
    match key {
        SortKey::Overall => b.overall_score.total_cmp(&a.overall_score),
        SortKey::Cost => a.min_cost().total_cmp(&b.min_cost()),
        SortKey::Speed => b.internet_speed.total_cmp(&a.internet_speed),
        SortKey::Nomads => b.nomads_count.cmp(&a.nomads_count),
        SortKey::Quality => b.quality_score.total_cmp(&a.quality_score),
        SortKey::Reviews => b.reviews_count.cmp(&a.reviews_count),
    }
}

/// A configured filtering pass.
///
/// Borrows the params and config; build one per invocation.
#[derive(Debug, Clone)]
pub struct CityFilter<'a> {
    params: &'a FilterParams,
    config: &'a FilterConfig,
    restrictions: Vec<&'a HashSet<String>>,
}

impl<'a> CityFilter<'a> {
    pub fn new(params: &'a FilterParams) -> Self {
        Self {
            params,
            config: FilterConfig::shared(),
            restrictions: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: &'a FilterConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep only cities whose id is in `ids`.
    ///
    /// Multiple restrictions intersect. An empty set matches nothing.
    pub fn restrict_to(mut self, ids: &'a HashSet<String>) -> Self {
        self.restrictions.push(ids);
        self
    }

    pub fn predicates(&self) -> Vec<CityPredicate<'a>> {
        let mut predicates: Vec<CityPredicate<'a>> = self
            .restrictions
            .iter()
            .copied()
            .map(CityPredicate::restrict)
            .collect();
        predicates.extend(CityPredicate::from_params(self.params, self.config));
        predicates
    }

    /// Filtered and sorted references into `cities`.
    pub fn select<'c>(&self, cities: &'c [City]) -> Vec<&'c City> {
        let predicates = self.predicates();
        let mut selected: Vec<&City> = cities
            .iter()
            .filter(|city| predicates.iter().all(|p| p.matches(city)))
            .collect();
        sort_cities(&mut selected, self.params.sort_by);

        debug!(
            total = cities.len(),
            matched = selected.len(),
            sort = %self.params.sort_by,
            unfiltered = self.params.is_unfiltered(),
            predicates = ?predicates.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
            "Applied city filters"
        );
        selected
    }

    /// Filtered and sorted copy of `cities`.
    pub fn apply(&self, cities: &[City]) -> Vec<City> {
        self.select(cities).into_iter().cloned().collect()
    }
}
