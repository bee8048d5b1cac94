//! Carga de datasets CSV
//!
//! Este módulo parsea las dos tablas de vehículos al arrancar y el
//! directorio de showrooms bajo demanda. El kilometraje viene como texto
//! libre ("45.6 kmpl", "N/A") y se normaliza a f64 en la carga.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{CarRecord, ShowroomRecord, VehicleRecord};
use crate::utils::errors::{AppError, AppResult};

/// Fila cruda de la tabla vehicles, antes de normalizar
#[derive(Debug, Deserialize)]
struct RawVehicleRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    category: String,
    #[serde(rename = "Fuel")]
    fuel: String,
    #[serde(rename = "Mileage")]
    mileage: String,
    #[serde(rename = "Price")]
    price: f64,
}

/// Fila cruda de la tabla cars
#[derive(Debug, Deserialize)]
struct RawCarRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Variant")]
    variant: String,
    #[serde(rename = "Fuel")]
    fuel: String,
    #[serde(rename = "Mileage")]
    mileage: String,
    #[serde(rename = "Price")]
    price: f64,
}

/// Loader de datasets con el regex de normalización precompilado
pub struct DatasetLoader {
    non_numeric_regex: Regex,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            // Todo lo que no sea dígito o punto decimal se descarta
            non_numeric_regex: Regex::new(r"[^0-9.]").expect("regex estático válido"),
        }
    }

    /// Normalizar kilometraje de texto libre a f64
    ///
    /// "45.6 kmpl" -> 45.6, "N/A" -> 0.0, "" -> 0.0. La coerción a cero es
    /// silenciosa, igual que en los datos de entrenamiento originales.
    pub fn normalize_mileage(&self, raw: &str) -> f64 {
        let cleaned = self.non_numeric_regex.replace_all(raw, "");
        cleaned.parse::<f64>().unwrap_or(0.0)
    }

    /// Cargar la tabla vehicles (dos ruedas)
    pub fn load_vehicles(&self, path: impl AsRef<Path>) -> AppResult<Vec<VehicleRecord>> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AppError::Dataset(format!("No se pudo abrir {}: {}", path.display(), e)))?;

        let mut vehicles = Vec::new();
        for row in reader.deserialize() {
            let raw: RawVehicleRow = row?;
            vehicles.push(VehicleRecord {
                mileage: self.normalize_mileage(&raw.mileage),
                name: raw.name,
                category: raw.category,
                fuel: raw.fuel,
                price: raw.price,
            });
        }

        if vehicles.is_empty() {
            return Err(AppError::Dataset(format!(
                "Dataset de vehículos vacío: {}",
                path.display()
            )));
        }

        info!("📄 Tabla vehicles cargada: {} filas", vehicles.len());
        Ok(vehicles)
    }

    /// Cargar la tabla cars
    pub fn load_cars(&self, path: impl AsRef<Path>) -> AppResult<Vec<CarRecord>> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AppError::Dataset(format!("No se pudo abrir {}: {}", path.display(), e)))?;

        let mut cars = Vec::new();
        for row in reader.deserialize() {
            let raw: RawCarRow = row?;
            cars.push(CarRecord {
                mileage: self.normalize_mileage(&raw.mileage),
                name: raw.name,
                variant: raw.variant,
                fuel: raw.fuel,
                price: raw.price,
            });
        }

        if cars.is_empty() {
            return Err(AppError::Dataset(format!(
                "Dataset de coches vacío: {}",
                path.display()
            )));
        }

        info!("📄 Tabla cars cargada: {} filas", cars.len());
        Ok(cars)
    }

    /// Cargar el directorio de showrooms
    ///
    /// Las columnas de marca y categoría se localizan por substring del
    /// header (case-insensitive); si falta alguna, el caller muestra el
    /// error y renderiza cero filas.
    pub fn load_showrooms(&self, path: impl AsRef<Path>) -> AppResult<Vec<ShowroomRecord>> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| AppError::Dataset(format!("No se pudo abrir {}: {}", path.display(), e)))?;

        // Headers limpiados como hace el dataset original (espacios, saltos
        // de línea y comillas sueltas)
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().replace(['\n', '\r', '"'], ""))
            .collect();

        let find_contains = |needle: &str| {
            headers
                .iter()
                .position(|h| h.to_lowercase().contains(needle))
        };
        let find_exact = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
        };

        let brand_idx = find_contains("brand").ok_or(AppError::MissingColumn("Brand".to_string()))?;
        let category_idx =
            find_contains("category").ok_or(AppError::MissingColumn("Category".to_string()))?;
        let name_idx = find_exact("Showroom Name")
            .ok_or(AppError::MissingColumn("Showroom Name".to_string()))?;
        let address_idx =
            find_exact("Address").ok_or(AppError::MissingColumn("Address".to_string()))?;
        let pincode_idx = find_exact("Pincode");

        let mut showrooms = Vec::new();
        for row in reader.records() {
            let record = match row {
                Ok(record) => record,
                Err(e) => {
                    // Filas malformadas se saltan, igual que on_bad_lines='skip'
                    warn!("Fila de showroom malformada, se ignora: {}", e);
                    continue;
                }
            };

            let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
            showrooms.push(ShowroomRecord {
                showroom_name: field(name_idx),
                brand: field(brand_idx),
                category: field(category_idx),
                address: field(address_idx),
                pincode: pincode_idx.map(field).unwrap_or_default(),
            });
        }

        info!("📄 Directorio de showrooms cargado: {} filas", showrooms.len());
        Ok(showrooms)
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_normalize_mileage_strips_units() {
        let loader = DatasetLoader::new();
        assert_eq!(loader.normalize_mileage("45.6 kmpl"), 45.6);
        assert_eq!(loader.normalize_mileage("60 kmpl"), 60.0);
    }

    #[test]
    fn test_normalize_mileage_missing_is_zero() {
        let loader = DatasetLoader::new();
        assert_eq!(loader.normalize_mileage("N/A"), 0.0);
        assert_eq!(loader.normalize_mileage(""), 0.0);
        assert_eq!(loader.normalize_mileage("electric"), 0.0);
    }

    #[test]
    fn test_load_vehicles_normalizes_rows() {
        let path = temp_csv(
            "advisor_vehicles_test.csv",
            "Name,Type,Fuel,Mileage,Price\n\
             Honda Activa 6G,Scooter,Petrol,45.6 kmpl,85000\n\
             Bajaj Pulsar 150,Bike,Petrol,N/A,115000\n",
        );

        let loader = DatasetLoader::new();
        let vehicles = loader.load_vehicles(&path).unwrap();

        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].mileage, 45.6);
        assert_eq!(vehicles[1].mileage, 0.0);
        assert_eq!(vehicles[1].category, "Bike");
    }

    #[test]
    fn test_load_showrooms_flexible_headers() {
        let path = temp_csv(
            "advisor_showrooms_test.csv",
            "Showroom Name,Vehicle Brand,Vehicle Category,Address,Pincode\n\
             Honda BigWing,Honda,Two-Wheeler,12 MG Road Pune,411001\n",
        );

        let loader = DatasetLoader::new();
        let showrooms = loader.load_showrooms(&path).unwrap();

        assert_eq!(showrooms.len(), 1);
        assert_eq!(showrooms[0].brand, "Honda");
        assert_eq!(showrooms[0].category, "Two-Wheeler");
        assert_eq!(showrooms[0].pincode, "411001");
    }

    #[test]
    fn test_load_showrooms_missing_brand_column() {
        let path = temp_csv(
            "advisor_showrooms_nobrand_test.csv",
            "Showroom Name,Category,Address,Pincode\n\
             Honda BigWing,car,12 MG Road Pune,411001\n",
        );

        let loader = DatasetLoader::new();
        let result = loader.load_showrooms(&path);
        assert!(matches!(result, Err(AppError::MissingColumn(ref col)) if col == "Brand"));
    }
}
