//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen default razonable: el servicio arranca sin .env.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    // Rutas de los datasets estáticos
    pub vehicle_csv: String,
    pub car_csv: String,
    pub showroom_csv: String,
    // URL del servicio para el cliente
    pub advisor_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            vehicle_csv: env::var("VEHICLE_CSV")
                .unwrap_or_else(|_| "data/updated_expanded_vehicle.csv".to_string()),
            car_csv: env::var("CAR_CSV")
                .unwrap_or_else(|_| "data/updated_expanded_car.csv".to_string()),
            showroom_csv: env::var("SHOWROOM_CSV")
                .unwrap_or_else(|_| "data/showrooms1.csv".to_string()),
            advisor_url: env::var("ADVISOR_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
