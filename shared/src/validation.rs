//! Validation rules applied to records before a collection is persisted.
//!
//! Mirrors the checks the entry forms enforce: required fields, numeric
//! sanity, integer quantities for the pieces unit, and surface for beds.

use crate::models::{Culture, Harvest, Location, LocationType, Seed};
use crate::types::{QuantityUnit, TimeRange};

/// Validate a seed record.
pub fn validate_seed(seed: &Seed) -> Result<(), &'static str> {
    if seed.common_name.trim().is_empty() {
        return Err("common name is required");
    }
    validate_range_field(seed.germination_time.as_deref())?;
    validate_range_field(seed.time_to_harvest.as_deref())?;
    Ok(())
}

fn validate_range_field(raw: Option<&str>) -> Result<(), &'static str> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(());
    };
    let range = TimeRange::parse(raw).ok_or("time range must be of the form \"min-max\"")?;
    if !range.is_ordered() {
        return Err("time range minimum exceeds maximum");
    }
    Ok(())
}

/// Validate a location record. Surface is required for beds only.
pub fn validate_location(location: &Location) -> Result<(), &'static str> {
    if location.name.trim().is_empty() {
        return Err("name is required");
    }
    if location.kind == LocationType::Parcelle {
        match location.surface {
            Some(surface) if surface.is_finite() && surface >= 0.0 => {}
            _ => return Err("surface is required for a bed"),
        }
    }
    Ok(())
}

/// Validate a culture record.
pub fn validate_culture(culture: &Culture) -> Result<(), &'static str> {
    if culture.name.trim().is_empty() {
        return Err("name is required");
    }
    if culture.location_id.trim().is_empty() {
        return Err("location reference is required");
    }
    if culture.seed_id.trim().is_empty() {
        return Err("seed reference is required");
    }
    if culture.plant_count < 1 {
        return Err("plant count must be at least 1");
    }
    if culture.planned_harvests < 1 {
        return Err("planned harvest count must be at least 1");
    }
    if culture.first_harvest_weeks == Some(0) {
        return Err("time to first harvest must be at least 1 week");
    }
    if culture.harvest_periodicity_weeks == Some(0) {
        return Err("harvest periodicity must be at least 1 week");
    }
    validate_quantity(culture.estimated_per_harvest, culture.unit)
}

/// Validate a harvest record.
pub fn validate_harvest(harvest: &Harvest) -> Result<(), &'static str> {
    if harvest.name.trim().is_empty() {
        return Err("name is required");
    }
    if harvest.culture_id.trim().is_empty() {
        return Err("culture reference is required");
    }
    validate_quantity(harvest.quantity, harvest.unit)
}

/// A quantity must be a non-negative finite number, and a whole number
/// when counted in pieces.
pub fn validate_quantity(quantity: f64, unit: QuantityUnit) -> Result<(), &'static str> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err("quantity must be a non-negative number");
    }
    if !unit.accepts(quantity) {
        return Err("quantity must be a whole number of pieces");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn culture() -> Culture {
        Culture {
            id: "culture_1".into(),
            name: "Culture-Tomate-20240301".into(),
            location_id: "location_1".into(),
            seed_id: "seed_1".into(),
            plant_count: 4,
            planting_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            first_harvest_weeks: None,
            harvest_periodicity_weeks: None,
            estimated_per_harvest: 2.5,
            unit: QuantityUnit::Kg,
            planned_harvests: 3,
            remarks: None,
            image: None,
        }
    }

    #[test]
    fn test_valid_culture() {
        assert!(validate_culture(&culture()).is_ok());
    }

    #[test]
    fn test_pieces_must_be_integer() {
        let mut c = culture();
        c.unit = QuantityUnit::Pieces;
        c.estimated_per_harvest = 2.5;
        assert!(validate_culture(&c).is_err());
        c.estimated_per_harvest = 2.0;
        assert!(validate_culture(&c).is_ok());
    }

    #[test]
    fn test_zero_plant_count_rejected() {
        let mut c = culture();
        c.plant_count = 0;
        assert!(validate_culture(&c).is_err());
    }

    #[test]
    fn test_bed_requires_surface() {
        let mut loc = Location {
            id: "location_1".into(),
            name: "Parcelle nord".into(),
            address: None,
            kind: LocationType::Parcelle,
            surface: None,
            image: None,
            remarks: None,
        };
        assert!(validate_location(&loc).is_err());
        loc.surface = Some(12.0);
        assert!(validate_location(&loc).is_ok());
        loc.kind = LocationType::Pot;
        loc.surface = None;
        assert!(validate_location(&loc).is_ok());
    }

    #[test]
    fn test_seed_range_sanity() {
        let mut seed = Seed {
            id: "seed_1".into(),
            common_name: "Tomate".into(),
            category: None,
            species: None,
            scientific_name: None,
            sowing_months: None,
            harvest_months: None,
            germination_time: None,
            time_to_harvest: Some("8-10".into()),
            kind: Default::default(),
            image: None,
            remarks: None,
        };
        assert!(validate_seed(&seed).is_ok());
        seed.time_to_harvest = Some("10-8".into());
        assert!(validate_seed(&seed).is_err());
        seed.time_to_harvest = Some("abc".into());
        assert!(validate_seed(&seed).is_err());
        seed.time_to_harvest = Some("".into());
        assert!(validate_seed(&seed).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut h = Harvest {
            id: "harvest_1".into(),
            name: " ".into(),
            culture_id: "culture_1".into(),
            quantity: 1.0,
            unit: QuantityUnit::Kg,
            harvest_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            remarks: None,
            image: None,
        };
        assert!(validate_harvest(&h).is_err());
        h.name = "Récolte".into();
        assert!(validate_harvest(&h).is_ok());
    }
}
