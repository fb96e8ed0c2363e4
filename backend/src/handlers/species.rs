//! Static species taxonomy, used by the seed entry form.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::AppState;
use shared::models::SpeciesGroup;

pub async fn get_species(State(state): State<AppState>) -> AppResult<Json<Vec<SpeciesGroup>>> {
    let species = state.store.load_species().await?;
    Ok(Json(species))
}
