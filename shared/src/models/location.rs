//! Growing locations: beds, pots, and seed trays.

use serde::{Deserialize, Serialize};

/// A physical growing site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Adresse", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Type")]
    pub kind: LocationType,
    /// Surface in m²; meaningful (and required) only for beds.
    #[serde(rename = "Surface", default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<f64>,
    #[serde(rename = "Image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "Remarques", default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    #[default]
    Parcelle,
    Pot,
    Caissette,
}

impl LocationType {
    pub fn default_image(&self) -> &'static str {
        match self {
            LocationType::Parcelle => "/data/icons/parcelle.png",
            LocationType::Pot => "/data/icons/pot.png",
            LocationType::Caissette => "/data/icons/caissette.png",
        }
    }
}
