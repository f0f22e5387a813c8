//! Command dispatch. Everything user-facing is written to `out`.

use anyhow::{Context, Result};
use nomad_core::prelude::*;
use nomad_core::store::ProfileStore;
use nomad_core::UserProfile;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::args::{CliArgs, Commands, ListAction, ProfileAction, QueryAction};

pub fn run(args: CliArgs, out: &mut impl Write) -> Result<()> {
    let CliArgs {
        input,
        config,
        store,
        command,
        ..
    } = args;

    match command {
        Commands::Stats => {
            let catalog = load_catalog(input.as_deref())?;
            let stats = catalog.stats();
            writeln!(out, "Dataset statistics:")?;
            writeln!(out, "  Cities: {}", stats.cities)?;
            writeln!(out, "  Provinces: {}", stats.provinces)?;
            writeln!(out, "  Nomads: {}", stats.nomads)?;
        }

        Commands::Regions => {
            let config = load_config(config.as_deref())?;
            for region in config.regions.regions() {
                writeln!(
                    out,
                    "{:<12} {} ({})",
                    region.code,
                    region.label,
                    region.provinces.join(", ")
                )?;
            }
        }

        Commands::List {
            query: text,
            favorites,
            bookmarks,
            json,
        } => {
            let catalog = load_catalog(input.as_deref())?;
            let config = load_config(config.as_deref())?;
            let params = query::decode_str(&text);

            let mut restrictions: Vec<HashSet<String>> = Vec::new();
            if favorites || bookmarks {
                let kv = open_store(&store)?;
                if favorites {
                    restrictions.push(IdListKind::Favorites.read(&kv)?.into_iter().collect());
                }
                if bookmarks {
                    restrictions.push(IdListKind::Bookmarks.read(&kv)?.into_iter().collect());
                }
            }

            let filter = restrictions
                .iter()
                .fold(CityFilter::new(&params).with_config(&config), |f, ids| {
                    f.restrict_to(ids)
                });
            let cities = filter.select(catalog.cities());

            if json {
                serde_json::to_writer_pretty(&mut *out, &cities)?;
                writeln!(out)?;
            } else if cities.is_empty() {
                writeln!(out, "No cities match: {text}")?;
            } else {
                for city in cities {
                    writeln!(out, "{}", format_city(city))?;
                }
            }
        }

        Commands::Query { action } => match action {
            QueryAction::Update {
                query,
                search,
                regions,
                cost_min,
                cost_max,
                speed,
                sort,
            } => {
                let mut state = FilterState::new(MemoryNavigator::with_query(&query));

                let mut update = FilterUpdate::new();
                if let Some(search) = search {
                    update = update.search(search);
                }
                if let Some(regions) = regions {
                    update = update.regions(
                        regions
                            .split(',')
                            .map(str::trim)
                            .filter(|code| !code.is_empty()),
                    );
                }
                if cost_min.is_some() || cost_max.is_some() {
                    let current = state.filters().cost_range;
                    update = update.cost_range(
                        cost_min.unwrap_or(current.min),
                        cost_max.unwrap_or(current.max),
                    );
                }
                if let Some(speed) = speed {
                    update = update.min_speed(speed);
                }
                if let Some(sort) = sort {
                    update = update.sort_by(sort);
                }

                state.update_filters(&update);
                writeln!(out, "{}", state.navigator().query())?;
            }
            QueryAction::Reset { query } => {
                let mut state = FilterState::new(MemoryNavigator::with_query(&query));
                state.reset_filters();
                writeln!(out, "{}", state.navigator().query())?;
            }
        },

        Commands::Favorite { action } => run_list(&store, IdListKind::Favorites, action, out)?,
        Commands::Bookmark { action } => run_list(&store, IdListKind::Bookmarks, action, out)?,
        Commands::Event { action } => run_list(&store, IdListKind::Participations, action, out)?,

        Commands::Profile { action } => {
            let mut kv = open_store(&store)?;
            let mut profiles = ProfileStore::new(&mut kv, guest_profile());
            let profile = match action {
                ProfileAction::Show => profiles.load()?,
                ProfileAction::SetName { name } => profiles.update_name(&name)?,
                ProfileAction::SetBio { bio } => profiles.update_bio(&bio)?,
                ProfileAction::SetAvatar { url } => profiles.update_avatar(&url)?,
            };
            serde_json::to_writer_pretty(&mut *out, &profile)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn run_list(
    store: &Path,
    kind: IdListKind,
    action: ListAction,
    out: &mut impl Write,
) -> Result<()> {
    let mut kv = open_store(store)?;
    let mut list = IdList::new(&mut kv, kind);

    match action {
        ListAction::Add { id } => {
            if list.add(&id)? {
                info!(%kind, id = %id, "Added id");
                writeln!(out, "Added {id} to {kind}")?;
            } else {
                writeln!(out, "{id} is already in {kind}")?;
            }
        }
        ListAction::Remove { id } => {
            if list.remove(&id)? {
                info!(%kind, id = %id, "Removed id");
                writeln!(out, "Removed {id} from {kind}")?;
            } else {
                writeln!(out, "{id} is not in {kind}")?;
            }
        }
        ListAction::Toggle { id } => {
            if list.toggle(&id)? {
                writeln!(out, "Added {id} to {kind}")?;
            } else {
                writeln!(out, "Removed {id} from {kind}")?;
            }
        }
        ListAction::List => {
            for id in list.ids()? {
                writeln!(out, "{id}")?;
            }
        }
    }
    Ok(())
}

fn load_catalog(input: Option<&Path>) -> Result<CityCatalog> {
    match input {
        Some(path) => CityCatalog::load_from_path(path)
            .with_context(|| format!("loading dataset {}", path.display())),
        None => CityCatalog::load().context("loading bundled dataset"),
    }
}

fn load_config(path: Option<&Path>) -> Result<FilterConfig> {
    match path {
        Some(path) => FilterConfig::from_json_file(path)
            .with_context(|| format!("loading filter config {}", path.display())),
        None => Ok(FilterConfig::default()),
    }
}

fn open_store(path: &Path) -> Result<JsonFileStore> {
    JsonFileStore::open(path).with_context(|| format!("opening store {}", path.display()))
}

/// Profile shown until the user saves one.
fn guest_profile() -> UserProfile {
    UserProfile {
        id: "guest".to_string(),
        email: "guest@example.com".to_string(),
        name: "Guest".to_string(),
        bio: None,
        avatar_url: None,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

fn format_city(city: &City) -> String {
    format!(
        "{:<12} {} {} | {} | {} | {} Mbps | {:.1}",
        city.id,
        city.emoji,
        city.name,
        city.province,
        city.cost_per_month,
        city.internet_speed,
        city.overall_score
    )
}
