//! Middleware de CORS
//!
//! El frontend corre en otro puerto, así que el servicio permite cualquier
//! origen, igual que el original.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS configurado para desarrollo
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
