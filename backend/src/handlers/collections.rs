//! Collection endpoints: read, replace, and delete-by-id.
//!
//! Reads return the stored JSON as-is. A replace deserializes the whole
//! payload into the typed records, validates each one, and overwrites
//! the file. `bilan` is addressable like a category but holds a single
//! report document instead of an array.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::services::culture::planting_date_is_recommended;
use crate::store::Collection;
use crate::AppState;
use shared::models::{Culture, Harvest, Location, ReportDocument, Seed};
use shared::validation;

pub async fn get_collection(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Value>> {
    if category == "bilan" {
        let report = state.store.load_report().await?;
        return Ok(Json(serde_json::to_value(report)?));
    }
    let collection = parse_category(&category)?;
    let records = state.store.load_raw(collection).await?;
    Ok(Json(Value::Array(records)))
}

pub async fn put_collection(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    if category == "bilan" {
        let report: ReportDocument = parse_payload(body)?;
        state.store.save_report(&report).await?;
        return Ok(saved());
    }

    let collection = parse_category(&category)?;
    match collection {
        Collection::Seeds => {
            let records: Vec<Seed> = parse_payload(body)?;
            for seed in &records {
                validation::validate_seed(seed).map_err(validation_error)?;
            }
            state.store.save(collection, &records).await?;
        }
        Collection::Locations => {
            let records: Vec<Location> = parse_payload(body)?;
            for location in &records {
                validation::validate_location(location).map_err(validation_error)?;
            }
            state.store.save(collection, &records).await?;
        }
        Collection::Cultures => {
            let records: Vec<Culture> = parse_payload(body)?;
            for culture in &records {
                validation::validate_culture(culture).map_err(validation_error)?;
            }
            warn_off_season_plantings(&state, &records).await;
            state.store.save(collection, &records).await?;
        }
        Collection::Harvests => {
            let records: Vec<Harvest> = parse_payload(body)?;
            for harvest in &records {
                validation::validate_harvest(harvest).map_err(validation_error)?;
            }
            state.store.save(collection, &records).await?;
        }
    }

    tracing::debug!(category = collection.as_str(), "collection replaced");
    Ok(saved())
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
    #[serde(default)]
    pub force: bool,
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(request): Json<DeleteRequest>,
) -> AppResult<Json<Value>> {
    if request.id.trim().is_empty() {
        return Err(AppError::InvalidId);
    }
    let collection = parse_category(&category)?;
    state
        .store
        .delete(collection, &request.id, request.force)
        .await?;
    Ok(Json(json!({ "message": "Entrée supprimée" })))
}

fn parse_category(category: &str) -> AppResult<Collection> {
    Collection::parse(category).ok_or_else(|| AppError::InvalidCategory(category.to_string()))
}

fn parse_payload<T: serde::de::DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
}

fn validation_error(msg: &'static str) -> AppError {
    AppError::Validation(msg.to_string())
}

fn saved() -> Json<Value> {
    Json(json!({ "message": "Données sauvegardées" }))
}

/// Off-season plantings are accepted but logged.
async fn warn_off_season_plantings(state: &AppState, cultures: &[Culture]) {
    let seeds: Vec<Seed> = match state.store.load(Collection::Seeds).await {
        Ok(seeds) => seeds,
        Err(_) => return,
    };
    for culture in cultures {
        if let Some(seed) = seeds.iter().find(|s| s.id == culture.seed_id) {
            if !planting_date_is_recommended(culture.planting_date, seed) {
                tracing::warn!(
                    culture = %culture.name,
                    plant = %seed.common_name,
                    date = %culture.planting_date,
                    "planting date outside the recommended sowing months"
                );
            }
        }
    }
}
