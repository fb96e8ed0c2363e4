//! Error handling for the Garden Records Server
//!
//! Provides consistent error responses in English and French

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid record id")]
    InvalidId,

    // Integrity conflicts: the caller may retry with force
    #[error("Location is used by a culture")]
    LocationInUse,

    #[error("Culture is used by a harvest")]
    CultureInUse,

    #[error("{0} not found")]
    NotFound(String),

    // Upload errors
    #[error("Upload error: {0}")]
    Upload(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Data file corrupted: {0}")]
    CorruptData(#[from] serde_json::Error),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_fr: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_fr: format!("Données invalides : {}", msg),
                },
            ),
            AppError::InvalidCategory(category) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_CATEGORY".to_string(),
                    message_en: format!("Invalid category: {}", category),
                    message_fr: "Catégorie invalide".to_string(),
                },
            ),
            AppError::InvalidId => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_ID".to_string(),
                    message_en: "Invalid record id".to_string(),
                    message_fr: "Identifiant invalide".to_string(),
                },
            ),
            AppError::LocationInUse => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "LOCATION_IN_USE".to_string(),
                    message_en: "Location is used by a culture".to_string(),
                    message_fr: "Lieu utilisé dans une culture".to_string(),
                },
            ),
            AppError::CultureInUse => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "CULTURE_IN_USE".to_string(),
                    message_en: "Culture is used by a harvest".to_string(),
                    message_fr: "Culture utilisée dans une récolte".to_string(),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_fr: "Entrée non trouvée".to_string(),
                },
            ),
            AppError::Upload(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "UPLOAD_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_fr: format!("Erreur d'upload : {}", msg),
                },
            ),
            AppError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "STORAGE_ERROR".to_string(),
                    message_en: "A storage error occurred".to_string(),
                    message_fr: "Erreur lors de l'accès aux données".to_string(),
                },
            ),
            AppError::CorruptData(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CORRUPT_DATA".to_string(),
                    message_en: "A data file could not be parsed".to_string(),
                    message_fr: "Fichier de données illisible".to_string(),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_fr: "Erreur serveur interne".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
