// crates/nomad-core/src/loader.rs

//! # Data Loader
//!
//! Reads a city dataset (a JSON array of [`City`] records, optionally
//! gzip-compressed) into a [`CityCatalog`]. The catalog is the read-only
//! snapshot the filtering core works on.

use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::common::CatalogStats;
use crate::error::{NomadError, Result};
use crate::model::City;

static CATALOG_CACHE: OnceCell<CityCatalog> = OnceCell::new();

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityCatalog {
    cities: Vec<City>,
}

impl CityCatalog {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.json"
    }

    /// Loads the bundled dataset once per process and returns a copy.
    pub fn load() -> Result<Self> {
        CATALOG_CACHE
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_from_path(path)
            })
            .cloned()
    }

    /// Loads a `.json` or `.json.gz` dataset.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let catalog = Self::from_reader(reader)?;
        debug!(path = %path.display(), cities = catalog.len(), "Loaded city dataset");
        Ok(catalog)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let cities: Vec<City> = serde_json::from_reader(reader)?;
        Ok(Self { cities })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cities: Vec<City> = serde_json::from_str(json)?;
        Ok(Self { cities })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn into_cities(self) -> Vec<City> {
        self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn stats(&self) -> CatalogStats {
        let provinces: BTreeSet<&str> = self.cities.iter().map(|c| c.province.as_str()).collect();
        CatalogStats {
            cities: self.cities.len(),
            provinces: provinces.len(),
            nomads: self.cities.iter().map(|c| u64::from(c.nomads_count)).sum(),
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        NomadError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(NomadError::Unsupported(format!(
            "{} is gzip-compressed; enable the `compact` feature",
            path.display()
        )))
    }
}
