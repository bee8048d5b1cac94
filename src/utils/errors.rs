//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::UnknownCategory(msg) => {
                tracing::error!("Categoría desconocida en inferencia: {}", msg);
                (
                    // El original deja propagar esto como fallo del request
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Unknown Category".to_string(),
                        message: msg,
                        code: Some("UNKNOWN_CATEGORY".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    code: Some("BAD_REQUEST".to_string()),
                },
            ),

            AppError::Dataset(msg) => {
                tracing::error!("Error de dataset: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Dataset Error".to_string(),
                        message: msg,
                        code: Some("DATASET_ERROR".to_string()),
                    },
                )
            }

            AppError::Csv(e) => {
                tracing::error!("Error CSV: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "CSV Error".to_string(),
                        message: e.to_string(),
                        code: Some("CSV_ERROR".to_string()),
                    },
                )
            }

            AppError::MissingColumn(col) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Missing Column".to_string(),
                    message: format!("Showroom data missing '{}' column", col),
                    code: Some("MISSING_COLUMN".to_string()),
                },
            ),

            AppError::Internal(msg) => {
                tracing::error!("Error interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: msg,
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type de la aplicación
pub type AppResult<T> = Result<T, AppError>;
