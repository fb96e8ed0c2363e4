//! Value types shared by the record models and the derived computations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// French month names, calendar order. Harvest-month labels and the
/// month filters use these, lowercased, as the display vocabulary.
pub const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// French month name for a 1-based calendar month.
pub fn french_month_name(month: u32) -> Option<&'static str> {
    FRENCH_MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// Normalize a stored month name (English, as written by the seed form,
/// or already French) to the French lowercase vocabulary. Unknown names
/// pass through lowercased so a typo degrades to a non-matching filter
/// value rather than an error.
pub fn normalize_month(raw: &str) -> Option<String> {
    let lower = raw.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    if let Some(pos) = ENGLISH_MONTHS.iter().position(|m| *m == lower) {
        return Some(FRENCH_MONTHS[pos].to_string());
    }
    Some(lower)
}

/// Calendar position (0-based) of a French month name, for sorting
/// month option lists in calendar order rather than alphabetically.
pub fn month_position(name: &str) -> Option<usize> {
    FRENCH_MONTHS.iter().position(|m| *m == name)
}

/// A "min-max" time range as stored on seed records: germination times
/// in days, time-to-harvest in weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub min: u32,
    pub max: u32,
}

impl TimeRange {
    /// Parse the stored "min-max" form. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (min, max) = raw.trim().split_once('-')?;
        let min = min.trim().parse().ok()?;
        let max = max.trim().parse().ok()?;
        Some(Self { min, max })
    }

    /// Arithmetic mean of the two bounds.
    pub fn mean(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Unit of a harvest quantity. Pieces are counted whole; kilograms
/// allow fractional values displayed to 2 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityUnit {
    #[default]
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "pieces")]
    Pieces,
}

impl QuantityUnit {
    /// Whether a quantity is acceptable for this unit.
    pub fn accepts(&self, quantity: f64) -> bool {
        if !quantity.is_finite() || quantity < 0.0 {
            return false;
        }
        match self {
            QuantityUnit::Kg => true,
            QuantityUnit::Pieces => quantity.fract() == 0.0,
        }
    }

    /// Display formatting: 2 decimals for kg, whole numbers for pieces.
    pub fn format(&self, quantity: f64) -> String {
        match self {
            QuantityUnit::Kg => format!("{quantity:.2}"),
            QuantityUnit::Pieces => format!("{quantity:.0}"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuantityUnit::Kg => "kg",
            QuantityUnit::Pieces => "pieces",
        }
    }
}

/// Creation timestamp embedded in a record id (`{prefix}_{epoch_millis}`,
/// minted by the clients that create records), 0 when the id does not
/// carry one. The default display sort key, newest first.
pub fn creation_timestamp(id: &str) -> i64 {
    id.rsplit_once('_')
        .and_then(|(_, suffix)| suffix.parse().ok())
        .unwrap_or(0)
}
