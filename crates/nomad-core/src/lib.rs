// crates/nomad-core/src/lib.rs

//! nomad-core
//! ==========
//!
//! Filtering, sorting and URL filter-state handling for a digital nomad
//! city guide.
//!
//! - [`apply_filters`] keeps the cities passing every active filter
//!   (search, regions, cost range, minimum speed) and sorts them.
//! - [`query`] maps [`FilterParams`] to and from URL query strings and
//!   drives navigation through [`query::FilterState`].
//! - [`store`] holds favorites, bookmarks, event participation and the
//!   user profile in an injected key-value store.
//!
//! ```rust
//! use nomad_core::prelude::*;
//!
//! let catalog = CityCatalog::load()?;
//! let params = query::decode_str("speed=850&sort=cheap");
//! for city in apply_filters(catalog.cities(), &params) {
//!     println!("{} {}", city.name, city.cost_per_month);
//! }
//! # Ok::<(), NomadError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod cost;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod query;
pub mod region;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::CatalogStats;
pub use crate::config::{FilterConfig, SearchFields};
pub use crate::cost::{extract_min_cost, parse_min_cost, CostBuckets};
pub use crate::error::{NomadError, Result};
pub use crate::filter::{
    apply_filters, apply_filters_with, sort_cities, CityFilter, CostRange, FilterParams, SortKey,
};
pub use crate::loader::CityCatalog;
pub use crate::model::{City, UserProfile};
pub use crate::query::{FilterState, FilterUpdate, QueryString};
pub use crate::region::{Region, RegionTable};

pub mod prelude {
    pub use crate::query::{self, MemoryNavigator, NavigateOptions, Navigator};
    pub use crate::store::{IdList, IdListKind, JsonFileStore, KeyValueStore, MemoryStore};
    pub use crate::traits::NameMatch;
    pub use crate::{
        apply_filters, apply_filters_with, CityCatalog, CityFilter, FilterConfig, FilterParams,
        FilterState, FilterUpdate, NomadError, QueryString, Result, SortKey,
    };
    pub use crate::{City, CostRange};
}
