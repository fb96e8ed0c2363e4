//! Yearly bilan generation: one Markdown section per harvest, joined
//! across culture, seed and location, with a small yield/schedule
//! analysis. Missing joins degrade to placeholder bullets.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::error::AppResult;
use crate::services::culture::estimated_harvest_date;
use crate::store::{Collection, JsonStore};
use shared::models::{Culture, Harvest, Location, ReportDocument, Seed};

/// Report service
#[derive(Clone)]
pub struct ReportService {
    store: Arc<JsonStore>,
}

impl ReportService {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Generate the bilan for the current year, persist it and return it.
    pub async fn generate(&self) -> AppResult<ReportDocument> {
        let seeds: Vec<Seed> = self.store.load(Collection::Seeds).await?;
        let locations: Vec<Location> = self.store.load(Collection::Locations).await?;
        let cultures: Vec<Culture> = self.store.load(Collection::Cultures).await?;
        let harvests: Vec<Harvest> = self.store.load(Collection::Harvests).await?;

        let year = Utc::now().year();
        let report = ReportDocument::new(render(year, &seeds, &locations, &cultures, &harvests));
        self.store.save_report(&report).await?;
        tracing::info!(year, harvests = harvests.len(), "bilan generated");
        Ok(report)
    }
}

/// Render the bilan Markdown. Pure; never fails on dangling references.
pub fn render(
    year: i32,
    seeds: &[Seed],
    locations: &[Location],
    cultures: &[Culture],
    harvests: &[Harvest],
) -> String {
    let mut md = format!("# Bilan de l'année {year}\n\n");

    if harvests.is_empty() {
        md.push_str("Aucune récolte enregistrée.\n\n");
        return md;
    }

    for harvest in harvests {
        let culture = cultures.iter().find(|c| c.id == harvest.culture_id);
        let seed = culture.and_then(|c| seeds.iter().find(|s| s.id == c.seed_id));
        let location = culture.and_then(|c| locations.iter().find(|l| l.id == c.location_id));

        let _ = writeln!(md, "## Récolte {}", display_name(&harvest.name));

        md.push_str("### Données de la plante\n");
        match seed {
            Some(seed) => {
                let _ = writeln!(md, "- Nom commun: {}", seed.common_name);
                let _ = writeln!(md, "- Catégorie: {}", opt(seed.category.as_deref()));
                let _ = writeln!(md, "- Mois de semis: {}", month_list(seed.sowing_month_list()));
                let _ = writeln!(md, "- Mois de récolte: {}", month_list(seed.harvest_month_list()));
                let _ = writeln!(
                    md,
                    "- Temps de germination: {} jours",
                    opt(seed.germination_time.as_deref())
                );
                let _ = writeln!(
                    md,
                    "- Temps pour récolte: {} semaines",
                    opt(seed.time_to_harvest.as_deref())
                );
            }
            None => md.push_str("- Aucune donnée de plante\n"),
        }

        md.push_str("### Données de la culture\n");
        match (culture, location) {
            (Some(culture), Some(location)) => {
                let _ = writeln!(md, "- Nom: {}", culture.name);
                let _ = writeln!(
                    md,
                    "- Lieu: {} ({})",
                    location.name,
                    opt(location.address.as_deref())
                );
                let _ = writeln!(md, "- Date de mise en terre: {}", culture.planting_date);
                let _ = writeln!(
                    md,
                    "- Quantité totale estimée: {}",
                    culture.estimated_total_display()
                );
            }
            _ => md.push_str("- Aucune donnée de culture\n"),
        }

        md.push_str("### Données de la récolte\n");
        let _ = writeln!(md, "- Date de récolte: {}", harvest.harvest_date);
        let _ = writeln!(md, "- Quantité: {}", harvest.quantity_display());

        md.push_str("### Analyse\n");
        let estimated = culture.map(Culture::estimated_total).unwrap_or(0.0);
        let diff = harvest.quantity - estimated;
        let diff_label = if diff >= 0.0 { "excédent" } else { "déficit" };
        let _ = writeln!(
            md,
            "- Écart de quantité: {:.2} {} ({})",
            diff,
            harvest.unit.label(),
            diff_label
        );

        let expected = culture.and_then(|c| {
            let seed = seed?;
            estimated_harvest_date(c.planting_date, seed)
        });
        match expected {
            Some(expected) => {
                let delay = (harvest.harvest_date - expected).num_days();
                let delay_label = if delay >= 0 { "retard" } else { "avance" };
                let _ = writeln!(md, "- Écart de calendrier: {} jours ({})", delay, delay_label);
            }
            None => md.push_str("- Écart de calendrier: N/A\n"),
        }

        let remarks = harvest
            .remarks
            .as_deref()
            .or_else(|| culture.and_then(|c| c.remarks.as_deref()))
            .unwrap_or("Aucune");
        let _ = writeln!(md, "- Remarques: {}\n", remarks);
    }

    md
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "Récolte sans nom"
    } else {
        name
    }
}

fn opt(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "N/A",
    }
}

fn month_list(months: Vec<String>) -> String {
    if months.is_empty() {
        "N/A".to_string()
    } else {
        months.join(", ")
    }
}
