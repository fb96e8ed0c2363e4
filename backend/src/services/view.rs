//! Filter/view layer: for each collection, derive the filter option
//! sets from the records actually in use, apply the active filters as
//! a conjunction, and return display rows in default order.
//!
//! Filter state is request-scoped: each struct deserializes from the
//! query string of a view endpoint. An absent or empty parameter is an
//! inactive filter and matches everything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::culture::{
    culture_age_days, harvest_month_label, harvest_proximity_warning, month_label,
};
use shared::models::{Culture, Harvest, Location, LocationType, Seed, SeedType, DEFAULT_SEED_IMAGE};
use shared::types::{creation_timestamp, month_position, normalize_month};

/// One entry of an id-keyed filter dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn sorted_distinct(mut values: Vec<String>) -> Vec<String> {
    values.sort_by_key(|v| v.to_lowercase());
    values.dedup();
    values
}

fn calendar_order(mut months: Vec<String>) -> Vec<String> {
    months.sort_by_key(|m| month_position(m).unwrap_or(usize::MAX));
    months.dedup();
    months
}

fn kind_label(kind: SeedType) -> &'static str {
    match kind {
        SeedType::Cyclique => "Cyclique",
        SeedType::Statique => "Statique",
    }
}

// ============================================================================
// Seeds
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SeedFilter {
    /// Case-insensitive substring of the common name.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub sowing_month: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedViewOptions {
    pub categories: Vec<String>,
    pub types: Vec<String>,
    pub sowing_months: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedView {
    pub options: SeedViewOptions,
    pub records: Vec<Seed>,
}

pub fn build_seed_view(seeds: Vec<Seed>, filter: &SeedFilter) -> SeedView {
    let options = SeedViewOptions {
        categories: sorted_distinct(seeds.iter().filter_map(|s| s.category.clone()).collect()),
        types: sorted_distinct(seeds.iter().map(|s| kind_label(s.kind).to_string()).collect()),
        sowing_months: calendar_order(
            seeds.iter().flat_map(|s| s.sowing_month_list()).collect(),
        ),
    };

    let month = active(&filter.sowing_month).and_then(normalize_month);
    let mut records: Vec<Seed> = seeds
        .into_iter()
        .filter(|seed| {
            let matches_search = active(&filter.search).map_or(true, |search| {
                seed.common_name.to_lowercase().contains(&search.to_lowercase())
            });
            let matches_category =
                active(&filter.category).map_or(true, |c| seed.category.as_deref() == Some(c));
            let matches_kind = active(&filter.kind).map_or(true, |k| kind_label(seed.kind) == k);
            let matches_month = month
                .as_deref()
                .map_or(true, |m| seed.sowing_month_list().iter().any(|s| s == m));
            matches_search && matches_category && matches_kind && matches_month
        })
        .collect();
    records.sort_by_key(|s| s.common_name.to_lowercase());
    for seed in &mut records {
        seed.image.get_or_insert_with(|| DEFAULT_SEED_IMAGE.to_string());
    }

    SeedView { options, records }
}

// ============================================================================
// Locations
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LocationFilter {
    /// Case-insensitive substring of the name or address.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocationViewOptions {
    pub types: Vec<String>,
    pub addresses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LocationView {
    pub options: LocationViewOptions,
    pub records: Vec<Location>,
}

fn location_kind_label(kind: LocationType) -> &'static str {
    match kind {
        LocationType::Parcelle => "Parcelle",
        LocationType::Pot => "Pot",
        LocationType::Caissette => "Caissette",
    }
}

pub fn build_location_view(locations: Vec<Location>, filter: &LocationFilter) -> LocationView {
    let options = LocationViewOptions {
        types: sorted_distinct(
            locations
                .iter()
                .map(|l| location_kind_label(l.kind).to_string())
                .collect(),
        ),
        addresses: sorted_distinct(
            locations
                .iter()
                .filter_map(|l| l.address.clone())
                .filter(|a| !a.trim().is_empty())
                .collect(),
        ),
    };

    let mut records: Vec<Location> = locations
        .into_iter()
        .filter(|loc| {
            let matches_search = active(&filter.search).map_or(true, |search| {
                let needle = search.to_lowercase();
                loc.name.to_lowercase().contains(&needle)
                    || loc
                        .address
                        .as_deref()
                        .is_some_and(|a| a.to_lowercase().contains(&needle))
            });
            let matches_kind =
                active(&filter.kind).map_or(true, |k| location_kind_label(loc.kind) == k);
            let matches_address =
                active(&filter.address).map_or(true, |a| loc.address.as_deref() == Some(a));
            matches_search && matches_kind && matches_address
        })
        .collect();
    records.sort_by_key(|l| std::cmp::Reverse(creation_timestamp(&l.id)));
    for location in &mut records {
        let fallback = location.kind.default_image();
        location.image.get_or_insert_with(|| fallback.to_string());
    }

    LocationView { options, records }
}

// ============================================================================
// Cultures
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CultureFilter {
    /// Seed id.
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Projected harvest month, French lowercase.
    #[serde(default)]
    pub harvest_month: Option<String>,
}

/// Display row joining a culture to its seed and location. Dangling
/// references leave the joined fields empty.
#[derive(Debug, Serialize)]
pub struct CultureViewRow {
    pub id: String,
    pub name: String,
    pub planting_date: NaiveDate,
    pub age_days: i64,
    pub plant_name: Option<String>,
    pub category: Option<String>,
    pub location_name: Option<String>,
    pub location_address: Option<String>,
    pub location_type: Option<LocationType>,
    pub harvest_month: Option<String>,
    pub proximity_warning: bool,
    pub estimated_total: String,
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct CultureViewOptions {
    pub seeds: Vec<OptionEntry>,
    pub addresses: Vec<String>,
    pub categories: Vec<String>,
    pub harvest_months: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CultureView {
    pub options: CultureViewOptions,
    pub records: Vec<CultureViewRow>,
}

pub fn build_culture_view(
    cultures: &[Culture],
    seeds: &[Seed],
    locations: &[Location],
    filter: &CultureFilter,
    today: NaiveDate,
) -> CultureView {
    let used_seeds: Vec<&Seed> = seeds
        .iter()
        .filter(|s| cultures.iter().any(|c| c.seed_id == s.id))
        .collect();
    let used_locations: Vec<&Location> = locations
        .iter()
        .filter(|l| cultures.iter().any(|c| c.location_id == l.id))
        .collect();

    let mut seed_options: Vec<OptionEntry> = used_seeds
        .iter()
        .map(|s| OptionEntry {
            value: s.id.clone(),
            label: s.common_name.clone(),
        })
        .collect();
    seed_options.sort_by_key(|o| o.label.to_lowercase());

    let options = CultureViewOptions {
        seeds: seed_options,
        addresses: sorted_distinct(
            used_locations
                .iter()
                .filter_map(|l| l.address.clone())
                .filter(|a| !a.trim().is_empty())
                .collect(),
        ),
        categories: sorted_distinct(
            used_seeds.iter().filter_map(|s| s.category.clone()).collect(),
        ),
        harvest_months: calendar_order(
            cultures
                .iter()
                .filter_map(|c| {
                    let seed = seeds.iter().find(|s| s.id == c.seed_id)?;
                    harvest_month_label(c.planting_date, seed)
                })
                .collect(),
        ),
    };

    let mut rows: Vec<CultureViewRow> = cultures
        .iter()
        .filter_map(|culture| {
            let seed = seeds.iter().find(|s| s.id == culture.seed_id);
            let location = locations.iter().find(|l| l.id == culture.location_id);
            let harvest_month = seed.and_then(|s| harvest_month_label(culture.planting_date, s));

            let matches_seed = active(&filter.seed).map_or(true, |id| culture.seed_id == id);
            let matches_address = active(&filter.address)
                .map_or(true, |a| location.and_then(|l| l.address.as_deref()) == Some(a));
            let matches_category = active(&filter.category)
                .map_or(true, |c| seed.and_then(|s| s.category.as_deref()) == Some(c));
            let matches_month =
                active(&filter.harvest_month).map_or(true, |m| harvest_month.as_deref() == Some(m));
            if !(matches_seed && matches_address && matches_category && matches_month) {
                return None;
            }

            Some(CultureViewRow {
                id: culture.id.clone(),
                name: culture.name.clone(),
                planting_date: culture.planting_date,
                age_days: culture_age_days(culture.planting_date, today),
                plant_name: seed.map(|s| s.common_name.clone()),
                category: seed.and_then(|s| s.category.clone()),
                location_name: location.map(|l| l.name.clone()),
                location_address: location.and_then(|l| l.address.clone()),
                location_type: location.map(|l| l.kind),
                harvest_month,
                proximity_warning: seed
                    .is_some_and(|s| harvest_proximity_warning(culture.planting_date, s, today)),
                estimated_total: culture.estimated_total_display(),
                image: culture
                    .image
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SEED_IMAGE.to_string()),
            })
        })
        .collect();
    rows.sort_by_key(|r| std::cmp::Reverse(creation_timestamp(&r.id)));

    CultureView { options, records: rows }
}

// ============================================================================
// Harvests
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct HarvestFilter {
    /// Culture id.
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Harvest month, French lowercase.
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HarvestViewRow {
    pub id: String,
    pub name: String,
    pub harvest_date: NaiveDate,
    pub month: Option<String>,
    pub quantity: String,
    pub culture_name: Option<String>,
    pub location_name: Option<String>,
    pub location_address: Option<String>,
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct HarvestViewOptions {
    pub cultures: Vec<OptionEntry>,
    pub addresses: Vec<String>,
    pub categories: Vec<String>,
    pub months: Vec<String>,
    pub units: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HarvestView {
    pub options: HarvestViewOptions,
    pub records: Vec<HarvestViewRow>,
}

pub fn build_harvest_view(
    harvests: &[Harvest],
    cultures: &[Culture],
    seeds: &[Seed],
    locations: &[Location],
    filter: &HarvestFilter,
) -> HarvestView {
    let used_cultures: Vec<&Culture> = cultures
        .iter()
        .filter(|c| harvests.iter().any(|h| h.culture_id == c.id))
        .collect();

    let mut culture_options: Vec<OptionEntry> = used_cultures
        .iter()
        .map(|c| OptionEntry {
            value: c.id.clone(),
            label: c.name.clone(),
        })
        .collect();
    culture_options.sort_by_key(|o| o.label.to_lowercase());

    let options = HarvestViewOptions {
        cultures: culture_options,
        addresses: sorted_distinct(
            used_cultures
                .iter()
                .filter_map(|c| {
                    let location = locations.iter().find(|l| l.id == c.location_id)?;
                    location.address.clone()
                })
                .filter(|a| !a.trim().is_empty())
                .collect(),
        ),
        categories: sorted_distinct(
            used_cultures
                .iter()
                .filter_map(|c| {
                    let seed = seeds.iter().find(|s| s.id == c.seed_id)?;
                    seed.category.clone()
                })
                .collect(),
        ),
        months: calendar_order(
            harvests
                .iter()
                .filter_map(|h| month_label(h.harvest_date))
                .collect(),
        ),
        units: sorted_distinct(harvests.iter().map(|h| h.unit.label().to_string()).collect()),
    };

    let mut rows: Vec<HarvestViewRow> = harvests
        .iter()
        .filter_map(|harvest| {
            let culture = cultures.iter().find(|c| c.id == harvest.culture_id);
            let seed = culture.and_then(|c| seeds.iter().find(|s| s.id == c.seed_id));
            let location = culture.and_then(|c| locations.iter().find(|l| l.id == c.location_id));
            let month = month_label(harvest.harvest_date);

            let matches_culture =
                active(&filter.culture).map_or(true, |id| harvest.culture_id == id);
            let matches_category = active(&filter.category)
                .map_or(true, |c| seed.and_then(|s| s.category.as_deref()) == Some(c));
            let matches_month = active(&filter.month).map_or(true, |m| month.as_deref() == Some(m));
            let matches_address = active(&filter.address)
                .map_or(true, |a| location.and_then(|l| l.address.as_deref()) == Some(a));
            let matches_unit = active(&filter.unit).map_or(true, |u| harvest.unit.label() == u);
            if !(matches_culture && matches_category && matches_month && matches_address && matches_unit)
            {
                return None;
            }

            Some(HarvestViewRow {
                id: harvest.id.clone(),
                name: harvest.name.clone(),
                harvest_date: harvest.harvest_date,
                month,
                quantity: harvest.quantity_display(),
                culture_name: culture.map(|c| c.name.clone()),
                location_name: location.map(|l| l.name.clone()),
                location_address: location.and_then(|l| l.address.clone()),
                image: harvest
                    .image
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SEED_IMAGE.to_string()),
            })
        })
        .collect();
    rows.sort_by_key(|r| std::cmp::Reverse(creation_timestamp(&r.id)));

    HarvestView { options, records: rows }
}
