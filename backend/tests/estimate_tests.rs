//! Tests for derived culture computations
//! Covers harvest date estimation, month labels and proximity warnings

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use garden_records_backend::services::culture::{
    culture_age_days, estimated_harvest_date, harvest_month_label, harvest_proximity_warning,
};
use shared::models::Seed;
use shared::types::TimeRange;

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

// =============================================================================
// Harvest Date Estimation Tests
// =============================================================================

mod harvest_estimation {
    use super::*;

    #[test]
    fn mean_of_range_drives_the_estimate() {
        // 8-10 weeks -> mean 9 -> 63 days after planting
        let seed = seed_with_range("8-10");
        assert_eq!(
            estimated_harvest_date(date(2024, 3, 1), &seed),
            Some(date(2024, 5, 3))
        );
    }

    #[test]
    fn half_week_mean_rounds_up() {
        // 1-2 weeks -> mean 1.5 -> 2 weeks
        let seed = seed_with_range("1-2");
        assert_eq!(
            estimated_harvest_date(date(2024, 3, 1), &seed),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn no_range_means_no_estimate() {
        let seed: Seed = serde_json::from_value(serde_json::json!({
            "id": "seed_1",
            "NomCommun": "Tomate",
            "Type": "Statique"
        }))
        .unwrap();
        assert_eq!(estimated_harvest_date(date(2024, 3, 1), &seed), None);
        assert_eq!(harvest_month_label(date(2024, 3, 1), &seed), None);
    }

    #[test]
    fn zero_range_means_no_estimate() {
        let seed = seed_with_range("0-0");
        assert_eq!(estimated_harvest_date(date(2024, 3, 1), &seed), None);
    }

    #[test]
    fn month_label_is_french_lowercase() {
        let seed = seed_with_range("8-10");
        assert_eq!(
            harvest_month_label(date(2024, 3, 1), &seed).as_deref(),
            Some("mai")
        );
        assert_eq!(
            harvest_month_label(date(2024, 10, 15), &seed).as_deref(),
            Some("décembre")
        );
    }
}

// =============================================================================
// Proximity Warning Tests
// =============================================================================

mod proximity_warning {
    use super::*;

    #[test]
    fn warning_fires_at_ninety_percent_of_mean() {
        // mean 10 weeks -> threshold at 9 weeks = 63 days
        let seed = seed_with_range("10-10");
        let planting = date(2024, 3, 1);
        assert!(!harvest_proximity_warning(
            planting,
            &seed,
            planting + Duration::days(62)
        ));
        assert!(harvest_proximity_warning(
            planting,
            &seed,
            planting + Duration::days(63)
        ));
    }

    #[test]
    fn warning_stays_on_past_the_estimate() {
        let seed = seed_with_range("8-10");
        let planting = date(2024, 3, 1);
        assert!(harvest_proximity_warning(
            planting,
            &seed,
            planting + Duration::days(365)
        ));
    }

    #[test]
    fn no_range_never_warns() {
        let seed: Seed = serde_json::from_value(serde_json::json!({
            "id": "seed_1",
            "NomCommun": "Tomate",
            "Type": "Cyclique"
        }))
        .unwrap();
        assert!(!harvest_proximity_warning(
            date(2024, 3, 1),
            &seed,
            date(2025, 3, 1)
        ));
    }

    #[test]
    fn age_is_absolute() {
        assert_eq!(culture_age_days(date(2024, 3, 1), date(2024, 3, 11)), 10);
        // A planting date in the future still yields a positive age
        assert_eq!(culture_age_days(date(2024, 3, 11), date(2024, 3, 1)), 10);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

mod property_tests {
    use super::*;

    proptest! {
        /// The mean of "a-b" is the arithmetic midpoint.
        #[test]
        fn prop_range_mean_is_midpoint(a in 0u32..=52, b in 0u32..=52) {
            prop_assume!(a <= b);
            let range = TimeRange::parse(&format!("{a}-{b}")).unwrap();
            prop_assert_eq!(range.mean(), (a as f64 + b as f64) / 2.0);
        }

        /// The estimate sits exactly round(mean) weeks after planting.
        #[test]
        fn prop_estimate_offset_is_rounded_mean_weeks(a in 1u32..=52, b in 1u32..=52) {
            prop_assume!(a <= b);
            let seed = seed_with_range(&format!("{a}-{b}"));
            let planting = date(2024, 3, 1);
            let estimate = estimated_harvest_date(planting, &seed).unwrap();
            let mean = (a as f64 + b as f64) / 2.0;
            prop_assert_eq!(
                (estimate - planting).num_days(),
                (mean.round() as i64) * 7
            );
        }

        /// Text that is not "min-max" never parses into a range.
        #[test]
        fn prop_malformed_ranges_rejected(s in "[a-z ]{1,12}") {
            prop_assert!(TimeRange::parse(&s).is_none());
            let seed = seed_with_range(&s);
            prop_assert_eq!(estimated_harvest_date(date(2024, 3, 1), &seed), None);
        }

        /// Once the warning fires it never turns off as days pass.
        #[test]
        fn prop_warning_is_monotone(weeks in 1u32..=20, offset in 0i64..=300) {
            let seed = seed_with_range(&format!("{weeks}-{weeks}"));
            let planting = date(2024, 3, 1);
            let today = planting + Duration::days(offset);
            if harvest_proximity_warning(planting, &seed, today) {
                prop_assert!(harvest_proximity_warning(
                    planting,
                    &seed,
                    today + Duration::days(1)
                ));
            }
        }
    }
}
