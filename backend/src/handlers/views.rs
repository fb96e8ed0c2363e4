//! View endpoints: filter options plus filtered, joined display rows.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;

use crate::error::AppResult;
use crate::services::view::{
    build_culture_view, build_harvest_view, build_location_view, build_seed_view, CultureFilter,
    CultureView, HarvestFilter, HarvestView, LocationFilter, LocationView, SeedFilter, SeedView,
};
use crate::store::Collection;
use crate::AppState;
use shared::models::{Culture, Harvest, Location, Seed};

pub async fn seed_view(
    State(state): State<AppState>,
    Query(filter): Query<SeedFilter>,
) -> AppResult<Json<SeedView>> {
    let seeds: Vec<Seed> = state.store.load(Collection::Seeds).await?;
    Ok(Json(build_seed_view(seeds, &filter)))
}

pub async fn location_view(
    State(state): State<AppState>,
    Query(filter): Query<LocationFilter>,
) -> AppResult<Json<LocationView>> {
    let locations: Vec<Location> = state.store.load(Collection::Locations).await?;
    Ok(Json(build_location_view(locations, &filter)))
}

pub async fn culture_view(
    State(state): State<AppState>,
    Query(filter): Query<CultureFilter>,
) -> AppResult<Json<CultureView>> {
    let cultures: Vec<Culture> = state.store.load(Collection::Cultures).await?;
    let seeds: Vec<Seed> = state.store.load(Collection::Seeds).await?;
    let locations: Vec<Location> = state.store.load(Collection::Locations).await?;
    let today = Utc::now().date_naive();
    Ok(Json(build_culture_view(
        &cultures, &seeds, &locations, &filter, today,
    )))
}

pub async fn harvest_view(
    State(state): State<AppState>,
    Query(filter): Query<HarvestFilter>,
) -> AppResult<Json<HarvestView>> {
    let harvests: Vec<Harvest> = state.store.load(Collection::Harvests).await?;
    let cultures: Vec<Culture> = state.store.load(Collection::Cultures).await?;
    let seeds: Vec<Seed> = state.store.load(Collection::Seeds).await?;
    let locations: Vec<Location> = state.store.load(Collection::Locations).await?;
    Ok(Json(build_harvest_view(
        &harvests, &cultures, &seeds, &locations, &filter,
    )))
}
