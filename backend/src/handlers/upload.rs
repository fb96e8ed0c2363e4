//! Image upload for record illustrations.
//!
//! Accepts a single multipart field named `image`, stores it under
//! `{data_dir}/pics/{uuid}.{ext}` and returns the public path.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::AppState;

pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<Value>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let extension = match field.content_type() {
            Some("image/jpeg") | Some("image/jpg") => "jpg",
            Some("image/png") => "png",
            Some("image/gif") => "gif",
            _ => {
                return Err(AppError::Upload(
                    "unsupported file type (JPEG, JPG, PNG, GIF only)".to_string(),
                ))
            }
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;
        if data.len() > state.config.upload.max_body_bytes {
            return Err(AppError::Upload("file too large".to_string()));
        }

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let pics_dir = Path::new(&state.config.storage.data_dir).join("pics");
        tokio::fs::create_dir_all(&pics_dir).await?;
        tokio::fs::write(pics_dir.join(&file_name), &data).await?;

        tracing::info!(file = %file_name, size = data.len(), "image uploaded");
        return Ok(Json(json!({ "image": format!("/data/pics/{file_name}") })));
    }

    Err(AppError::Upload("no image field in request".to_string()))
}
