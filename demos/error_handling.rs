//! Error handling example for nomad-cities
//!
//! This example demonstrates proper error handling and edge cases

use nomad_core::prelude::*;
use nomad_core::CostBuckets;

fn main() -> Result<()> {
    println!("=== nomad-cities Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match CityCatalog::load_from_path("/does/not/exist/cities.json") {
        Ok(catalog) => println!("✓ Loaded {} cities", catalog.len()),
        Err(NomadError::NotFound(msg)) => println!("✗ Not found: {msg}"),
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    }
    println!();

    // Example 2: Malformed dataset JSON
    println!("--- Example 2: Malformed dataset ---");
    match CityCatalog::from_json_str(r#"[{"id": "x"}]"#) {
        Ok(_) => println!("  unexpectedly parsed"),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    // Example 3: Invalid configuration
    println!("--- Example 3: Invalid configuration ---");
    match CostBuckets::new([3.0, 2.0, 1.0, 0.5]) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  Rejected buckets: {e}"),
    }
    match FilterConfig::from_json_str(r#"{"regions": [{"code": "", "label": "x", "provinces": []}]}"#) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  Rejected regions: {e}"),
    }
    println!();

    // Example 4: Bad query values never fail, they fall back per field
    println!("--- Example 4: Lenient query decoding ---");
    for raw in ["speed=fast", "costMin=0&costMax=9", "sort=popular", "regions=,,"] {
        let params = query::decode_str(raw);
        println!("  {raw:<22} -> {params:?}");
    }
    println!();

    // Example 5: Unknown cost strings
    println!("--- Example 5: Unknown cost ---");
    let catalog = CityCatalog::load()?;
    let mut cities = catalog.into_cities();
    if let Some(first) = cities.first_mut() {
        first.cost_per_month = "문의".to_string();
        println!("  {} min cost: {}", first.name, first.min_cost());
    }
    let full = apply_filters(&cities, &FilterParams::default());
    let narrowed = apply_filters(&cities, &FilterParams::new().with_cost_range(1, 4));
    println!("  Full range keeps {} cities, 1-4 keeps {}", full.len(), narrowed.len());

    Ok(())
}
