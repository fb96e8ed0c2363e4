//! Harvests: one recorded yield event tied to a culture.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::QuantityUnit;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harvest {
    pub id: String,
    #[serde(rename = "Nom")]
    pub name: String,
    /// Soft reference to the culture this yield came from.
    #[serde(rename = "Culture")]
    pub culture_id: String,
    #[serde(rename = "Quantité")]
    pub quantity: f64,
    #[serde(rename = "Unité de récolte", default)]
    pub unit: QuantityUnit,
    #[serde(rename = "Date de récolte")]
    pub harvest_date: NaiveDate,
    #[serde(rename = "Remarques", default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(rename = "Image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Harvest {
    /// Quantity formatted for display, e.g. "3.20 kg" or "12 pieces".
    pub fn quantity_display(&self) -> String {
        format!("{} {}", self.unit.format(self.quantity), self.unit.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let harvest: Harvest = serde_json::from_value(serde_json::json!({
            "id": "harvest_1714212000000",
            "Nom": "Récolte-Culture-Tomate-20240301-20240503",
            "Culture": "culture_1714212000000",
            "Quantité": 3.2,
            "Unité de récolte": "kg",
            "Date de récolte": "2024-05-03"
        }))
        .unwrap();
        assert_eq!(harvest.quantity_display(), "3.20 kg");
        let value = serde_json::to_value(&harvest).unwrap();
        assert_eq!(value["Date de récolte"], "2024-05-03");
    }

    #[test]
    fn test_unit_defaults_to_kg() {
        let harvest: Harvest = serde_json::from_value(serde_json::json!({
            "id": "harvest_1",
            "Nom": "Sans unité",
            "Culture": "culture_1",
            "Quantité": 1.0,
            "Date de récolte": "2024-06-01"
        }))
        .unwrap();
        assert_eq!(harvest.unit, QuantityUnit::Kg);
    }
}
