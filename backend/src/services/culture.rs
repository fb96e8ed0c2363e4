//! Derived computations over cultures: harvest estimates, age,
//! proximity warnings, planting-date checks, and auto-naming.

use chrono::{Datelike, Duration, NaiveDate};

use shared::models::Seed;
use shared::types::french_month_name;

/// Warning fires when the culture has reached this share of the mean
/// time-to-harvest.
const PROXIMITY_THRESHOLD: f64 = 0.9;

/// Projected first-harvest date: planting date plus the rounded mean
/// time-to-harvest. `None` when the seed carries no usable range.
pub fn estimated_harvest_date(planting_date: NaiveDate, seed: &Seed) -> Option<NaiveDate> {
    let mean_weeks = seed.harvest_time_range()?.mean();
    if mean_weeks <= 0.0 {
        return None;
    }
    let days = (mean_weeks.round() as i64) * 7;
    planting_date.checked_add_signed(Duration::days(days))
}

/// French lowercase month name of the projected first harvest.
pub fn harvest_month_label(planting_date: NaiveDate, seed: &Seed) -> Option<String> {
    let date = estimated_harvest_date(planting_date, seed)?;
    french_month_name(date.month()).map(str::to_string)
}

/// French lowercase month name of a recorded harvest date.
pub fn month_label(date: NaiveDate) -> Option<String> {
    french_month_name(date.month()).map(str::to_string)
}

/// Age of a culture in days.
pub fn culture_age_days(planting_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - planting_date).num_days().abs()
}

/// Whether the culture is close enough to harvest to warn about:
/// age in weeks has reached 90% of the mean time-to-harvest.
pub fn harvest_proximity_warning(planting_date: NaiveDate, seed: &Seed, today: NaiveDate) -> bool {
    let Some(range) = seed.harvest_time_range() else {
        return false;
    };
    let mean_weeks = range.mean();
    if mean_weeks <= 0.0 {
        return false;
    }
    let age_weeks = culture_age_days(planting_date, today) as f64 / 7.0;
    age_weeks >= mean_weeks * PROXIMITY_THRESHOLD
}

/// A planting date is recommended when the seed lists no sowing months
/// or the month of the date is among them. Never blocking; callers log.
pub fn planting_date_is_recommended(planting_date: NaiveDate, seed: &Seed) -> bool {
    let months = seed.sowing_month_list();
    if months.is_empty() {
        return true;
    }
    match french_month_name(planting_date.month()) {
        Some(label) => months.iter().any(|m| m == label),
        None => true,
    }
}

/// Default name for a new culture: `Culture-{plant}-{YYYYMMDD}`.
pub fn culture_auto_name(plant_name: &str, planting_date: NaiveDate) -> String {
    format!("Culture-{}-{}", plant_name, planting_date.format("%Y%m%d"))
}

/// Default name for a new harvest: `Récolte-{culture}-{YYYYMMDD}`.
pub fn harvest_auto_name(culture_name: &str, harvest_date: NaiveDate) -> String {
    format!("Récolte-{}-{}", culture_name, harvest_date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_with_range(range: &str) -> Seed {
        serde_json::from_value(serde_json::json!({
            "id": "seed_1",
            "NomCommun": "Tomate",
            "TempsPourRécolte": range,
            "Type": "Cyclique"
        }))
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_estimated_harvest_date() {
        // 8-10 weeks -> mean 9 -> 63 days
        let seed = seed_with_range("8-10");
        assert_eq!(
            estimated_harvest_date(date(2024, 3, 1), &seed),
            Some(date(2024, 5, 3))
        );
    }

    #[test]
    fn test_harvest_month_label() {
        let seed = seed_with_range("8-10");
        assert_eq!(
            harvest_month_label(date(2024, 3, 1), &seed).as_deref(),
            Some("mai")
        );
    }

    #[test]
    fn test_estimate_without_range() {
        let seed: Seed = serde_json::from_value(serde_json::json!({
            "id": "seed_1",
            "NomCommun": "Tomate",
            "Type": "Cyclique"
        }))
        .unwrap();
        assert_eq!(estimated_harvest_date(date(2024, 3, 1), &seed), None);
    }

    #[test]
    fn test_half_week_mean_rounds() {
        // 1-2 weeks -> mean 1.5 -> rounds to 2 weeks
        let seed = seed_with_range("1-2");
        assert_eq!(
            estimated_harvest_date(date(2024, 3, 1), &seed),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn test_culture_age() {
        assert_eq!(culture_age_days(date(2024, 3, 1), date(2024, 3, 11)), 10);
        assert_eq!(culture_age_days(date(2024, 3, 1), date(2024, 3, 1)), 0);
    }

    #[test]
    fn test_proximity_boundary() {
        // mean 10 weeks -> threshold 9 weeks = 63 days
        let seed = seed_with_range("10-10");
        let planting = date(2024, 3, 1);
        assert!(!harvest_proximity_warning(planting, &seed, planting + Duration::days(62)));
        assert!(harvest_proximity_warning(planting, &seed, planting + Duration::days(63)));
    }

    #[test]
    fn test_proximity_without_range() {
        let seed: Seed = serde_json::from_value(serde_json::json!({
            "id": "seed_1",
            "NomCommun": "Tomate",
            "Type": "Statique"
        }))
        .unwrap();
        assert!(!harvest_proximity_warning(date(2024, 3, 1), &seed, date(2025, 3, 1)));
    }

    #[test]
    fn test_planting_date_check() {
        let mut seed = seed_with_range("8-10");
        seed.sowing_months = Some("March, April".into());
        assert!(planting_date_is_recommended(date(2024, 3, 15), &seed));
        assert!(!planting_date_is_recommended(date(2024, 6, 15), &seed));
        seed.sowing_months = None;
        assert!(planting_date_is_recommended(date(2024, 6, 15), &seed));
    }

    #[test]
    fn test_auto_names() {
        assert_eq!(
            culture_auto_name("Tomate", date(2024, 3, 1)),
            "Culture-Tomate-20240301"
        );
        assert_eq!(
            harvest_auto_name("Culture-Tomate-20240301", date(2024, 5, 3)),
            "Récolte-Culture-Tomate-20240301-20240503"
        );
    }
}
