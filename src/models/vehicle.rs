//! Modelos de Vehicle y Car
//!
//! Este módulo contiene los registros inmutables que se cargan una sola vez
//! desde los CSV al arrancar el servicio. Mapean exactamente a las columnas
//! de los datasets.

use serde::{Deserialize, Serialize};

/// Registro de vehículo de dos ruedas (tabla vehicles)
///
/// `mileage` ya viene normalizado por el loader: se extrae la parte numérica
/// del texto libre y el resto se descarta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRecord {
    pub name: String,
    pub category: String,
    pub fuel: String,
    pub mileage: f64,
    pub price: f64,
}

/// Registro de coche (tabla cars) - tabla separada, sin relación con vehicles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarRecord {
    pub name: String,
    pub variant: String,
    pub fuel: String,
    pub mileage: f64,
    pub price: f64,
}
