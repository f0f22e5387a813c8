// crates/nomad-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a city dataset.
///
/// Returned by [`crate::CityCatalog::stats`]; counts reflect the cities in
/// memory, not what a filter would keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    /// Distinct provinces.
    pub provinces: usize,
    /// Sum of `nomads_count` over all cities.
    pub nomads: u64,
}
