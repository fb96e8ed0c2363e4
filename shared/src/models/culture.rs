//! Cultures: an active planting of a seed variety at a location.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::QuantityUnit;

/// An active planting. `location_id` and `seed_id` are soft references:
/// a dangling reference degrades to a placeholder at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Culture {
    pub id: String,
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Lieu")]
    pub location_id: String,
    #[serde(rename = "Plante")]
    pub seed_id: String,
    /// Number of plants put in the ground.
    #[serde(rename = "Quantité")]
    pub plant_count: u32,
    #[serde(rename = "Date de mise en terre")]
    pub planting_date: NaiveDate,
    /// Weeks until the first expected harvest, when known.
    #[serde(
        rename = "Temps pour première récolte",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub first_harvest_weeks: Option<u32>,
    /// Weeks between harvests for cyclic plants.
    #[serde(
        rename = "Périodicité des récoltes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub harvest_periodicity_weeks: Option<u32>,
    #[serde(rename = "Quantité estimée par récolte")]
    pub estimated_per_harvest: f64,
    #[serde(rename = "Unité de récolte", default)]
    pub unit: QuantityUnit,
    #[serde(rename = "Nombre de récoltes prévues")]
    pub planned_harvests: u32,
    #[serde(rename = "Remarques", default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(rename = "Image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Culture {
    /// Total estimated yield over the season.
    pub fn estimated_total(&self) -> f64 {
        self.estimated_per_harvest * f64::from(self.planned_harvests)
    }

    /// Estimated total formatted for display, e.g. "12.50 kg".
    pub fn estimated_total_display(&self) -> String {
        format!("{} {}", self.unit.format(self.estimated_total()), self.unit.label())
    }
}
