//! Bilan generation endpoint.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::services::ReportService;
use crate::AppState;
use shared::models::ReportDocument;

pub async fn generate_report(State(state): State<AppState>) -> AppResult<Json<ReportDocument>> {
    let report = ReportService::new(state.store.clone()).generate().await?;
    Ok(Json(report))
}
