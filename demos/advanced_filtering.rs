//! Advanced filtering example for nomad-cities
//!
//! This example demonstrates custom configuration, restrictions and the
//! URL-backed filter state.

use nomad_core::prelude::*;
use nomad_core::{CostBuckets, SearchFields};
use std::collections::HashSet;

fn main() -> Result<()> {
    println!("=== nomad-cities Advanced Filtering Example ===\n");

    let catalog = CityCatalog::load()?;

    // Example 1: Cost buckets
    println!("--- Example 1: Cost buckets with the default bounds ---");
    let config = FilterConfig::default();
    for city in catalog.cities() {
        let bucket = config
            .cost_buckets
            .bucket(&city.cost_per_month)
            .map_or_else(|| "?".to_string(), |b| b.to_string());
        println!("- {:<4} {:<10} bucket {}", city.name, city.cost_per_month, bucket);
    }
    println!();

    // Example 2: Tighter buckets move the same cities up the scale
    println!("--- Example 2: Custom cost buckets ---");
    let config = FilterConfig::new().with_cost_buckets(CostBuckets::new([1.0, 1.5, 1.8, 2.2])?);
    let cheap = FilterParams::new().with_cost_range(1, 2).with_sort(SortKey::Cost);
    let names: Vec<_> = apply_filters_with(catalog.cities(), &cheap, &config)
        .into_iter()
        .map(|c| c.name)
        .collect();
    println!("Cost 1-2 with custom buckets: {names:?}");
    println!();

    // Example 3: Description search is opt-in
    println!("--- Example 3: Searching descriptions ---");
    let params = FilterParams::new().with_search("해변");
    let config = FilterConfig::new().with_search_fields(SearchFields {
        province: true,
        description: true,
    });
    for city in apply_filters_with(catalog.cities(), &params, &config) {
        println!("- {}: {}", city.name, city.description());
    }
    println!();

    // Example 4: Restrict to a favorites list kept in a store
    println!("--- Example 4: Favorites only ---");
    let mut store = MemoryStore::new();
    {
        let mut favorites = IdList::favorites(&mut store);
        favorites.add("gangneung")?;
        favorites.add("jeju")?;
        favorites.add("busan")?;
    }
    let favorites: HashSet<String> = IdListKind::Favorites.read(&store)?.into_iter().collect();
    let params = FilterParams::new().with_min_speed(800);
    let filter = CityFilter::new(&params).restrict_to(&favorites);
    println!(
        "Predicates: {:?}",
        filter.predicates().iter().map(|p| p.to_string()).collect::<Vec<_>>()
    );
    for city in filter.select(catalog.cities()) {
        println!("- {} ({} Mbps)", city.name, city.internet_speed);
    }
    println!();

    // Example 5: URL-driven filter state
    println!("--- Example 5: Filter state backed by a query string ---");
    let mut state = FilterState::new(MemoryNavigator::with_query("?tab=map"));
    state.update_filters(&FilterUpdate::new().regions(["seoul", "gangwon"]).sort_by(SortKey::Speed));
    println!("URL: ?{}", state.navigator().query());
    state.update_filters(&FilterUpdate::new().cost_range(2, 4).min_speed(900));
    println!("URL: ?{}", state.navigator().query());
    for city in apply_filters(catalog.cities(), &state.filters()) {
        println!("- {} {}", city.name, city.internet_speed);
    }
    state.reset_filters();
    println!("After reset: ?{}", state.navigator().query());

    Ok(())
}
