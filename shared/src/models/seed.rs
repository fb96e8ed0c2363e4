//! Seed catalog entries: a plantable variety with timing metadata.

use serde::{Deserialize, Serialize};

use crate::types::{normalize_month, TimeRange};

/// Shared placeholder icon, also used by cultures and harvests.
pub const DEFAULT_SEED_IMAGE: &str = "/data/icons/seed.png";

/// A seed variety.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub id: String,
    #[serde(rename = "NomCommun")]
    pub common_name: String,
    #[serde(rename = "Categorie", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "Espèce", default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(rename = "NomScientifique", default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// Recommended sowing months, comma-separated English month names.
    #[serde(rename = "DatesSemis", default, skip_serializing_if = "Option::is_none")]
    pub sowing_months: Option<String>,
    /// Usual harvest months, same format as `sowing_months`.
    #[serde(rename = "DatesRécolte", default, skip_serializing_if = "Option::is_none")]
    pub harvest_months: Option<String>,
    /// Germination time range "min-max", in days.
    #[serde(rename = "TempsGermination", default, skip_serializing_if = "Option::is_none")]
    pub germination_time: Option<String>,
    /// Time-to-harvest range "min-max", in weeks.
    #[serde(rename = "TempsPourRécolte", default, skip_serializing_if = "Option::is_none")]
    pub time_to_harvest: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: SeedType,
    #[serde(rename = "Image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "Remarques", default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Whether the plant yields repeatedly or once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedType {
    #[default]
    Cyclique,
    Statique,
}

impl Seed {
    /// Recommended sowing months, normalized to the French vocabulary.
    /// Empty when the seed does not constrain sowing.
    pub fn sowing_month_list(&self) -> Vec<String> {
        Self::month_list(self.sowing_months.as_deref())
    }

    /// Usual harvest months, normalized like `sowing_month_list`.
    pub fn harvest_month_list(&self) -> Vec<String> {
        Self::month_list(self.harvest_months.as_deref())
    }

    fn month_list(raw: Option<&str>) -> Vec<String> {
        raw.unwrap_or("")
            .split(',')
            .filter_map(normalize_month)
            .collect()
    }

    /// Parsed time-to-harvest range, in weeks.
    pub fn harvest_time_range(&self) -> Option<TimeRange> {
        TimeRange::parse(self.time_to_harvest.as_deref()?)
    }
}
