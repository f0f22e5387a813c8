// crates/nomad-core/src/model.rs
use serde::{Deserialize, Serialize};

use crate::cost::extract_min_cost;
use crate::traits::NameMatch;

/// A city entry as served by the external data source.
///
/// Field names follow the upstream dataset (snake_case) so a JSON export can
/// be deserialized directly. The filtering core only ever reads cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    /// Province (administrative region) the city belongs to.
    pub province: String,
    #[serde(default)]
    pub emoji: String,

    pub overall_score: f64,
    /// Monthly cost as displayed, e.g. `"1.8~2.5M"` or `"100M"`.
    pub cost_per_month: String,
    /// Internet speed in Mbps.
    pub internet_speed: f64,
    pub nomads_count: u32,
    pub cafe_rating: f64,
    pub work_score: f64,
    pub quality_score: f64,
    pub reviews_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dislikes_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl City {
    /// Lower bound of the monthly cost, `0.0` when the cost string carries no number.
    pub fn min_cost(&self) -> f64 {
        extract_min_cost(&self.cost_per_month)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Locally stored user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::City;

    pub fn city(id: &str, province: &str, overall: f64, speed: f64, cost: &str) -> City {
        City {
            id: id.to_string(),
            name: id.to_string(),
            province: province.to_string(),
            emoji: String::new(),
            overall_score: overall,
            cost_per_month: cost.to_string(),
            internet_speed: speed,
            nomads_count: 0,
            cafe_rating: 0.0,
            work_score: 0.0,
            quality_score: 0.0,
            reviews_count: 0,
            likes_count: None,
            dislikes_count: None,
            description: None,
            image_url: None,
        }
    }
}
