//! DTOs de recomendación
//!
//! Request y response del endpoint POST /recommend. Los nombres de campo
//! del wire se mantienen en camelCase.

use serde::{Deserialize, Serialize};

/// Selector de tipo de vehículo en el wire: 0=Scooter, 1=Bike, 2=Car
pub const VEHICLE_TYPE_SCOOTER: u8 = 0;
pub const VEHICLE_TYPE_BIKE: u8 = 1;
pub const VEHICLE_TYPE_CAR: u8 = 2;

/// Request de recomendación - se construye por llamada, sin persistencia
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub age: u32,
    pub salary: f64,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: u8,
}

/// Resultado de recomendación
///
/// `price` es literal para coches y predicho por el modelo para dos ruedas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub name: String,
    pub price: f64,
    pub mileage: f64,
    pub fuel: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_field_names() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"age": 25, "salary": 80000, "vehicleType": 0}"#).unwrap();

        assert_eq!(request.age, 25);
        assert_eq!(request.salary, 80000.0);
        assert_eq!(request.vehicle_type, VEHICLE_TYPE_SCOOTER);
    }

    #[test]
    fn test_result_serializes_plain_fields() {
        let result = RecommendationResult {
            name: "Honda Activa 6G".to_string(),
            price: 89500.0,
            mileage: 45.0,
            fuel: "Petrol".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "Honda Activa 6G");
        assert_eq!(json["price"], 89500.0);
        assert_eq!(json["mileage"], 45.0);
        assert_eq!(json["fuel"], "Petrol");
    }
}
