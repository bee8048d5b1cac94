//! API endpoints
//!
//! Este módulo contiene los endpoints de la API.

pub mod recommend;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/recommend", post(recommend::recommend))
        .route("/health", get(recommend::health))
}
