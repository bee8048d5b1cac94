//! Modelo de predicción de precios
//!
//! Entrena una única regresión lineal al arrancar sobre la tabla vehicles:
//! (tipo codificado, fuel codificado, mileage) -> precio. El modelo se
//! reutiliza en cada request y nunca se reentrena.

use tracing::info;

use crate::analysis::encoder::LabelEncoder;
use crate::analysis::regression::{r2_score, LinearRegression, NUM_FEATURES};
use crate::models::VehicleRecord;
use crate::utils::errors::AppResult;

/// Regresión ajustada junto con los encoders de sus features categóricos
#[derive(Debug, Clone)]
pub struct PricePredictor {
    type_encoder: LabelEncoder,
    fuel_encoder: LabelEncoder,
    model: LinearRegression,
    r_squared: f64,
}

impl PricePredictor {
    /// Entrenar el modelo sobre la tabla vehicles completa
    pub fn fit(vehicles: &[VehicleRecord]) -> AppResult<Self> {
        let type_encoder = LabelEncoder::fit(vehicles.iter().map(|v| v.category.as_str()));
        let fuel_encoder = LabelEncoder::fit(vehicles.iter().map(|v| v.fuel.as_str()));

        let mut features: Vec<[f64; NUM_FEATURES]> = Vec::with_capacity(vehicles.len());
        let mut targets: Vec<f64> = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            features.push([
                type_encoder.transform(&vehicle.category)? as f64,
                fuel_encoder.transform(&vehicle.fuel)? as f64,
                vehicle.mileage,
            ]);
            targets.push(vehicle.price);
        }

        let model = LinearRegression::fit(&features, &targets)?;

        let predictions: Vec<f64> = features.iter().map(|x| model.predict(x)).collect();
        let r_squared = r2_score(&targets, &predictions);
        info!("📊 Modelo de precios entrenado - R²: {:.2}", r_squared);

        Ok(Self {
            type_encoder,
            fuel_encoder,
            model,
            r_squared,
        })
    }

    /// Código entero de una categoría de vehículo ("Scooter"/"Bike")
    ///
    /// Falla si la categoría nunca se observó en entrenamiento.
    pub fn type_code(&self, category: &str) -> AppResult<usize> {
        self.type_encoder.transform(category)
    }

    /// Predecir el precio de un registro usando sus propios features
    pub fn predict_price(&self, vehicle: &VehicleRecord) -> AppResult<f64> {
        let features = [
            self.type_encoder.transform(&vehicle.category)? as f64,
            self.fuel_encoder.transform(&vehicle.fuel)? as f64,
            vehicle.mileage,
        ];
        Ok(self.model.predict(&features))
    }

    /// R² sobre el set de entrenamiento, solo diagnóstico
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(name: &str, category: &str, fuel: &str, mileage: f64, price: f64) -> VehicleRecord {
        VehicleRecord {
            name: name.to_string(),
            category: category.to_string(),
            fuel: fuel.to_string(),
            mileage,
            price,
        }
    }

    /// Precios exactamente lineales en los features codificados, para que el
    /// ajuste sea exacto y los asserts deterministas
    fn linear_fixture() -> Vec<VehicleRecord> {
        // type: Scooter=0, Bike=1; fuel: Petrol=0, Electric=1
        // price = 50000 + 40000*type + 5000*fuel + 1000*mileage
        let rows = [
            ("Honda Activa 6G", "Scooter", "Petrol", 45.0),
            ("TVS Jupiter", "Scooter", "Petrol", 50.0),
            ("Ola S1", "Scooter", "Electric", 30.0),
            ("Bajaj Pulsar 150", "Bike", "Petrol", 48.0),
            ("Hero Splendor Plus", "Bike", "Petrol", 65.0),
            ("Revolt RV400", "Bike", "Electric", 35.0),
        ];
        rows.iter()
            .map(|(name, category, fuel, mileage)| {
                let type_code = if *category == "Bike" { 1.0 } else { 0.0 };
                let fuel_code = if *fuel == "Electric" { 1.0 } else { 0.0 };
                let price = 50000.0 + 40000.0 * type_code + 5000.0 * fuel_code + 1000.0 * mileage;
                vehicle(name, category, fuel, *mileage, price)
            })
            .collect()
    }

    #[test]
    fn test_fit_encodes_in_observed_order() {
        let predictor = PricePredictor::fit(&linear_fixture()).unwrap();

        assert_eq!(predictor.type_code("Scooter").unwrap(), 0);
        assert_eq!(predictor.type_code("Bike").unwrap(), 1);
        assert!(predictor.type_code("Car").is_err());
    }

    #[test]
    fn test_predict_price_matches_generating_function() {
        let vehicles = linear_fixture();
        let predictor = PricePredictor::fit(&vehicles).unwrap();

        for vehicle in &vehicles {
            let predicted = predictor.predict_price(vehicle).unwrap();
            assert!(
                (predicted - vehicle.price).abs() < 1.0,
                "{}: predicho {} vs literal {}",
                vehicle.name,
                predicted,
                vehicle.price
            );
        }
    }

    #[test]
    fn test_r_squared_is_one_on_noiseless_data() {
        let predictor = PricePredictor::fit(&linear_fixture()).unwrap();
        assert!(predictor.r_squared() > 0.999);
    }
}
