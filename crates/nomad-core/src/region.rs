// crates/nomad-core/src/region.rs

//! Region codes used by the `regions` filter.
//!
//! A region groups one or more provinces under a short URL-safe code
//! (`seoul`, `jeju`, ...). Cities only carry a province, so region
//! membership is resolved through this table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{NomadError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// URL-safe code, e.g. `gangwon`.
    pub code: String,
    /// Display label.
    pub label: String,
    /// Province names grouped under this code.
    pub provinces: Vec<String>,
}

impl Region {
    pub fn new(code: &str, label: &str, provinces: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            provinces: provinces.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn contains_province(&self, province: &str) -> bool {
        self.provinces.iter().any(|p| p == province)
    }
}

/// Lookup table from region code to provinces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self {
            regions: vec![
                Region::new("seoul", "서울/경기", &["서울특별시", "경기도"]),
                Region::new("gangwon", "강원", &["강원도"]),
                Region::new(
                    "jeonlla",
                    "전라",
                    &["전라북도", "전라남도", "광주광역시"],
                ),
                Region::new(
                    "gyeongsan",
                    "경상",
                    &["부산광역시", "대구광역시", "경상북도", "경상남도"],
                ),
                Region::new(
                    "chungcheong",
                    "충청",
                    &["충청북도", "충청남도", "대전광역시"],
                ),
                Region::new("jeju", "제주", &["제주특별자치도"]),
            ],
        }
    }
}

impl RegionTable {
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        let table = Self { regions };
        table.validate()?;
        Ok(table)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, code: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.code == code)
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.code.as_str())
    }

    /// True when `province` belongs to any of `codes`.
    ///
    /// A code that equals the province name itself also matches, so raw
    /// province names work as codes for provinces outside the table.
    pub fn matches(&self, codes: &BTreeSet<String>, province: &str) -> bool {
        codes.iter().any(|code| {
            code == province
                || self
                    .get(code)
                    .is_some_and(|region| region.contains_province(province))
        })
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for region in &self.regions {
            let code = region.code.as_str();
            if code.is_empty() || code.contains(',') || code.trim() != code {
                return Err(NomadError::Config(format!(
                    "region code must be non-empty, trimmed and comma free: {code:?}"
                )));
            }
            if !seen.insert(code) {
                return Err(NomadError::Config(format!("duplicate region code: {code}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn resolves_province_through_code() {
        let table = RegionTable::default();
        assert!(table.matches(&codes(&["gangwon"]), "강원도"));
        assert!(table.matches(&codes(&["jeju", "seoul"]), "경기도"));
        assert!(!table.matches(&codes(&["jeju"]), "부산광역시"));
    }

    #[test]
    fn literal_province_code_matches() {
        let table = RegionTable::default();
        assert!(table.matches(&codes(&["Seoul"]), "Seoul"));
        assert!(!table.matches(&codes(&["Seoul"]), "Busan"));
    }

    #[test]
    fn looks_up_regions_by_code() {
        let table = RegionTable::default();
        assert!(table.get("gyeongsan").is_some_and(|r| r.contains_province("대구광역시")));
        assert!(table.get("tokyo").is_none());
        assert!(table.is_known("jeonlla"));
        assert_eq!(table.codes().count(), 6);
    }

    #[test]
    fn rejects_duplicate_or_malformed_codes() {
        let dup = RegionTable::new(vec![
            Region::new("a", "A", &["x"]),
            Region::new("a", "A2", &["y"]),
        ]);
        assert!(dup.is_err());
        assert!(RegionTable::new(vec![Region::new("a,b", "AB", &[])]).is_err());
        assert!(RegionTable::new(vec![Region::new("", "none", &[])]).is_err());
    }
}
