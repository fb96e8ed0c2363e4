//! Tests for bilan generation
//! The report joins each harvest to its culture, seed and location and
//! is persisted alongside the collections

use std::sync::Arc;

use serde_json::json;

use garden_records_backend::services::ReportService;
use garden_records_backend::store::{Collection, JsonStore};

async fn seeded_store() -> (tempfile::TempDir, Arc<JsonStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonStore::new(dir.path()));

    store
        .save(
            Collection::Seeds,
            &[json!({
                "id": "seed_1",
                "NomCommun": "Tomate",
                "Categorie": "Solanacées",
                "TempsPourRécolte": "8-10",
                "Type": "Cyclique"
            })],
        )
        .await
        .unwrap();
    store
        .save(
            Collection::Locations,
            &[json!({
                "id": "location_1",
                "Nom": "Potager sud",
                "Adresse": "12 rue des Lilas",
                "Type": "Parcelle",
                "Surface": 20.0
            })],
        )
        .await
        .unwrap();
    store
        .save(
            Collection::Cultures,
            &[json!({
                "id": "culture_1",
                "Nom": "Culture-Tomate-20240301",
                "Lieu": "location_1",
                "Plante": "seed_1",
                "Quantité": 4,
                "Date de mise en terre": "2024-03-01",
                "Quantité estimée par récolte": 2.0,
                "Unité de récolte": "kg",
                "Nombre de récoltes prévues": 2
            })],
        )
        .await
        .unwrap();
    store
        .save(
            Collection::Harvests,
            &[json!({
                "id": "harvest_1",
                "Nom": "Récolte-Culture-Tomate-20240301-20240510",
                "Culture": "culture_1",
                "Quantité": 5.0,
                "Unité de récolte": "kg",
                "Date de récolte": "2024-05-10"
            })],
        )
        .await
        .unwrap();

    (dir, store)
}

// =============================================================================
// Generation Tests
// =============================================================================

mod generation {
    use super::*;

    #[tokio::test]
    async fn generated_report_is_persisted() {
        let (_dir, store) = seeded_store().await;
        let service = ReportService::new(store.clone());

        let report = service.generate().await.unwrap();
        assert!(report.content.starts_with("# Bilan de l'année"));
        assert!(report.content.contains("- Nom commun: Tomate"));
        assert!(report.content.contains("- Lieu: Potager sud (12 rue des Lilas)"));

        // The stored copy matches what was returned
        let stored = store.load_report().await.unwrap();
        assert_eq!(stored.content, report.content);
    }

    #[tokio::test]
    async fn regeneration_replaces_the_previous_report() {
        let (_dir, store) = seeded_store().await;
        let service = ReportService::new(store.clone());

        service.generate().await.unwrap();
        store.save(Collection::Harvests, &Vec::<serde_json::Value>::new()).await.unwrap();
        let report = service.generate().await.unwrap();

        assert!(report.content.contains("Aucune récolte enregistrée."));
        assert!(!report.content.contains("## Récolte"));
    }

    #[tokio::test]
    async fn empty_store_yields_a_minimal_report() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::new(dir.path()));
        let report = ReportService::new(store).generate().await.unwrap();
        assert!(report.content.contains("Aucune récolte enregistrée."));
    }
}
