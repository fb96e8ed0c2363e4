//! API route definitions

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{collections, health, report, species, upload, views};
use crate::AppState;

/// All `/api` routes. Static routes come before the category capture.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/species", get(species::get_species))
        .route("/upload-image", post(upload::upload_image))
        .route("/bilan/generate", post(report::generate_report))
        .route("/views/seeds", get(views::seed_view))
        .route("/views/locations", get(views::location_view))
        .route("/views/cultures", get(views::culture_view))
        .route("/views/harvests", get(views::harvest_view))
        .route(
            "/:category",
            get(collections::get_collection).put(collections::put_collection),
        )
        .route("/:category/delete", post(collections::delete_record))
}
