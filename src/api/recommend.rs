//! Handler de recomendaciones
//!
//! Este módulo expone POST /recommend y el health check del servicio.

use axum::{extract::State, Json};
use serde_json::json;
use tracing::info;

use crate::dto::{RecommendationRequest, RecommendationResult};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// POST /recommend - lista de vehículos dentro de la banda del usuario
///
/// Toda rama de rechazo responde `[]`; los campos del body no se validan
/// más allá del tipado del deserializador.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<RecommendationResult>>> {
    info!(
        "📨 Request de recomendación: edad {}, salario {}, tipo {}",
        request.age, request.salary, request.vehicle_type
    );

    let results = state.recommendations.recommend(&request)?;
    info!("✅ {} recomendaciones devueltas", results.len());
    Ok(Json(results))
}

/// GET /health - liveness del servicio
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-advisor",
        "status": "healthy",
        "vehicles": state.datasets.vehicles.len(),
        "cars": state.datasets.cars.len(),
        "model_r2": state.predictor.r_squared(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
