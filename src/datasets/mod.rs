//! Datasets estáticos
//!
//! Las dos tablas de vehículos se cargan una única vez al arrancar y son
//! inmutables durante toda la vida del proceso.

pub mod loader;

pub use loader::DatasetLoader;

use crate::config::EnvironmentConfig;
use crate::models::{CarRecord, VehicleRecord};
use crate::utils::errors::AppResult;

/// Tablas de entrenamiento y catálogo cargadas al arrancar
#[derive(Debug, Clone)]
pub struct Datasets {
    pub vehicles: Vec<VehicleRecord>,
    pub cars: Vec<CarRecord>,
}

impl Datasets {
    /// Cargar las dos tablas desde las rutas configuradas
    pub fn load(config: &EnvironmentConfig) -> AppResult<Self> {
        let loader = DatasetLoader::new();
        Ok(Self {
            vehicles: loader.load_vehicles(&config.vehicle_csv)?,
            cars: loader.load_cars(&config.car_csv)?,
        })
    }
}
