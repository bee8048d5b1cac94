//! Modelo de Showroom
//!
//! Directorio estático de concesionarios. Lo carga el cliente de forma
//! perezosa la primera vez que se necesita la vista de showrooms.

use serde::{Deserialize, Serialize};

/// Registro del directorio de showrooms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowroomRecord {
    pub showroom_name: String,
    pub brand: String,
    pub category: String,
    pub address: String,
    pub pincode: String,
}

impl ShowroomRecord {
    /// URL de búsqueda en Google Maps: nombre + dirección + pincode,
    /// espacios reemplazados por '+'
    pub fn maps_url(&self) -> String {
        let query = format!("{},{}, {}", self.showroom_name, self.address, self.pincode)
            .replace(' ', "+");
        format!("https://www.google.com/maps/search/?api=1&query={}", query)
    }
}
