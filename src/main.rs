use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use dotenvy::dotenv;

use vehicle_advisor::api;
use vehicle_advisor::config::EnvironmentConfig;
use vehicle_advisor::middleware::cors::cors_middleware;
use vehicle_advisor::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚘 Vehicle Advisor - Servicio de Recomendaciones");
    info!("================================================");

    let config = EnvironmentConfig::default();

    // Cargar datasets y entrenar el modelo una sola vez
    let app_state = match AppState::initialize(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("❌ Error inicializando el servicio: {}", e);
            return Err(anyhow::anyhow!("Error de arranque: {}", e));
        }
    };

    info!(
        "🔧 Datasets: {} vehículos, {} coches - R² del modelo: {:.2}",
        app_state.datasets.vehicles.len(),
        app_state.datasets.cars.len(),
        app_state.predictor.r_squared()
    );

    // Crear router de la API
    let app = Router::new()
        .merge(api::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST /recommend - Recomendaciones por edad/salario/tipo");
    info!("   GET  /health - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
