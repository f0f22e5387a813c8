//! Basic usage example for nomad-cities
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset
//! - Filter and sort cities with `FilterParams`
//! - Read filters from a URL query string
//! - Look up a single city

use nomad_cities::prelude::*;

fn main() -> Result<()> {
    println!("=== nomad-cities Basic Usage Example ===\n");

    println!("Loading city dataset...");
    let catalog = CityCatalog::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Dataset overview
    println!("--- Example 1: Dataset overview ---");
    let stats = catalog.stats();
    println!("Cities: {}", stats.cities);
    println!("Provinces: {}", stats.provinces);
    println!("Nomads: {}", stats.nomads);
    println!();

    // Example 2: Default params keep everything, best overall first
    println!("--- Example 2: All cities by overall score ---");
    for (i, city) in apply_filters(catalog.cities(), &FilterParams::default())
        .iter()
        .enumerate()
    {
        println!("{}. {} {} ({:.1})", i + 1, city.emoji, city.name, city.overall_score);
    }
    println!();

    // Example 3: Builder-style params
    println!("--- Example 3: Fast internet, cheapest first ---");
    let params = FilterParams::new()
        .with_min_speed(850)
        .with_sort(SortKey::Cost);
    for city in apply_filters(catalog.cities(), &params) {
        println!("- {} {} / {} Mbps", city.name, city.cost_per_month, city.internet_speed);
    }
    println!();

    // Example 4: The same selection expressed as a URL query
    println!("--- Example 4: Filters from a query string ---");
    let params = query::decode_str("?regions=gyeongsan,jeju&sort=nomads");
    println!("Decoded: {params:?}");
    for city in apply_filters(catalog.cities(), &params) {
        println!("- {} ({} nomads)", city.name, city.nomads_count);
    }
    println!("Re-encoded: {}", query::encode(&params));
    println!();

    // Example 5: Look up one city
    println!("--- Example 5: Find a city by id ---");
    match catalog.find_by_id("jeonju") {
        Some(city) => {
            println!("Found: {} {}", city.emoji, city.name);
            println!("Province: {}", city.province);
            println!("Cost: {} (min {:.1})", city.cost_per_month, city.min_cost());
            println!("Description: {}", city.description());
        }
        None => println!("jeonju not found"),
    }

    Ok(())
}
