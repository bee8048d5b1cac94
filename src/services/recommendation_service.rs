//! Servicio de recomendaciones
//!
//! Filtra los catálogos contra la banda de precios que corresponde a
//! (edad, salario, tipo de vehículo). Las tablas de decisión son datos,
//! no condicionales anidados, para poder testear cada bracket.
//!
//! Coches: precio literal del catálogo. Dos ruedas: precio predicho por la
//! regresión usando los features del propio registro.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::PricePredictor;
use crate::datasets::Datasets;
use crate::dto::{
    RecommendationRequest, RecommendationResult, VEHICLE_TYPE_BIKE, VEHICLE_TYPE_CAR,
    VEHICLE_TYPE_SCOOTER,
};
use crate::utils::errors::{AppError, AppResult};

/// Banda de precios con extremos inclusivos
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    /// Banda por defecto cuando ninguna fila de la tabla aplica
    pub const UNBOUNDED: PriceBand = PriceBand {
        min: 0.0,
        max: f64::INFINITY,
    };

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Rango de salario con inclusividad configurable en cada extremo
#[derive(Debug, Clone, Copy)]
struct SalaryRange {
    min: f64,
    max: f64,
    min_inclusive: bool,
    max_inclusive: bool,
}

impl SalaryRange {
    const fn inclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
            max_inclusive: true,
        }
    }

    const fn exclusive_min(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: false,
            max_inclusive: true,
        }
    }

    const fn above(min: f64) -> Self {
        Self::exclusive_min(min, f64::INFINITY)
    }

    fn contains(&self, salary: f64) -> bool {
        let lower = if self.min_inclusive {
            salary >= self.min
        } else {
            salary > self.min
        };
        let upper = if self.max_inclusive {
            salary <= self.max
        } else {
            salary < self.max
        };
        lower && upper
    }
}

/// Filtro sobre el precio literal de un coche
#[derive(Debug, Clone, Copy)]
enum CarPriceRule {
    AtMost(f64),
    Above(f64),
}

impl CarPriceRule {
    fn matches(&self, price: f64) -> bool {
        match self {
            CarPriceRule::AtMost(ceiling) => price <= *ceiling,
            CarPriceRule::Above(floor) => price > *floor,
        }
    }
}

/// Brackets de salario para coches
///
/// Los huecos del original (p. ej. nada entre salario mínimo y 75000 tras el
/// guard) se preservan tal cual: salario fuera de todo bracket -> vacío.
const CAR_BRACKETS: [(SalaryRange, CarPriceRule); 4] = [
    (
        SalaryRange::inclusive(75_000.0, 100_000.0),
        CarPriceRule::AtMost(1_300_000.0),
    ),
    (
        SalaryRange {
            min: 100_000.0,
            max: 150_000.0,
            min_inclusive: false,
            max_inclusive: false,
        },
        CarPriceRule::AtMost(1_900_000.0),
    ),
    (
        SalaryRange::inclusive(150_000.0, 300_000.0),
        CarPriceRule::AtMost(3_200_000.0),
    ),
    (SalaryRange::above(300_000.0), CarPriceRule::Above(1_900_000.0)),
];

/// Fila de la tabla edad×salario para dos ruedas. Gana la primera que aplica.
#[derive(Debug, Clone, Copy)]
struct TwoWheelerRule {
    age_min: u32,
    age_max: u32,
    salary: SalaryRange,
    band: PriceBand,
}

const TWO_WHEELER_RULES: [TwoWheelerRule; 6] = [
    TwoWheelerRule {
        age_min: 18,
        age_max: 35,
        salary: SalaryRange::inclusive(20_000.0, 50_000.0),
        band: PriceBand {
            min: 0.0,
            max: 100_000.0,
        },
    },
    TwoWheelerRule {
        age_min: 18,
        age_max: 35,
        salary: SalaryRange::exclusive_min(50_000.0, 100_000.0),
        band: PriceBand {
            min: 100_000.0,
            max: 200_000.0,
        },
    },
    TwoWheelerRule {
        age_min: 36,
        age_max: 70,
        salary: SalaryRange::inclusive(20_000.0, 50_000.0),
        band: PriceBand {
            min: 0.0,
            max: 100_000.0,
        },
    },
    TwoWheelerRule {
        age_min: 36,
        age_max: 50,
        salary: SalaryRange::exclusive_min(50_000.0, 100_000.0),
        band: PriceBand {
            min: 100_000.0,
            max: 150_000.0,
        },
    },
    TwoWheelerRule {
        age_min: 51,
        age_max: 70,
        salary: SalaryRange::above(50_000.0),
        band: PriceBand {
            min: 0.0,
            max: 150_000.0,
        },
    },
    TwoWheelerRule {
        age_min: 36,
        age_max: 70,
        salary: SalaryRange::above(100_000.0),
        band: PriceBand {
            min: 0.0,
            max: 300_000.0,
        },
    },
];

/// Banda de precios de dos ruedas para una combinación edad/salario
///
/// Combinaciones sin fila aplicable caen a la banda sin límite, igual que
/// el original.
pub fn two_wheeler_band(age: u32, salary: f64) -> PriceBand {
    TWO_WHEELER_RULES
        .iter()
        .find(|rule| age >= rule.age_min && age <= rule.age_max && rule.salary.contains(salary))
        .map(|rule| rule.band)
        .unwrap_or(PriceBand::UNBOUNDED)
}

/// Servicio de recomendaciones: tablas inmutables + modelo entrenado
#[derive(Clone)]
pub struct RecommendationService {
    datasets: Arc<Datasets>,
    predictor: Arc<PricePredictor>,
}

impl RecommendationService {
    pub fn new(datasets: Arc<Datasets>, predictor: Arc<PricePredictor>) -> Self {
        Self {
            datasets,
            predictor,
        }
    }

    /// Operación principal: lista de vehículos dentro de la banda del usuario
    ///
    /// Toda rama de rechazo devuelve lista vacía; solo una categoría no vista
    /// en entrenamiento produce error.
    pub fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<RecommendationResult>> {
        match request.vehicle_type {
            VEHICLE_TYPE_CAR => self.recommend_cars(request.age, request.salary),
            other => self.recommend_two_wheelers(request.age, request.salary, other),
        }
    }

    fn recommend_cars(&self, age: u32, salary: f64) -> AppResult<Vec<RecommendationResult>> {
        if salary < 75_000.0 || age <= 18 {
            return Ok(Vec::new());
        }

        let Some((_, rule)) = CAR_BRACKETS
            .iter()
            .find(|(range, _)| range.contains(salary))
        else {
            return Ok(Vec::new());
        };

        // Precio literal del catálogo, orden de la tabla
        let results = self
            .datasets
            .cars
            .iter()
            .filter(|car| rule.matches(car.price))
            .map(|car| RecommendationResult {
                name: car.name.clone(),
                price: car.price,
                mileage: car.mileage,
                fuel: car.fuel.clone(),
            })
            .collect::<Vec<_>>();

        debug!("Coches recomendados: {} (salario {})", results.len(), salary);
        Ok(results)
    }

    fn recommend_two_wheelers(
        &self,
        age: u32,
        salary: f64,
        vehicle_type: u8,
    ) -> AppResult<Vec<RecommendationResult>> {
        if salary < 20_000.0 || age < 18 {
            return Ok(Vec::new());
        }

        // Un selector fuera de {0,1} llega aquí y falla al codificar,
        // como en el diseño original
        let category = match vehicle_type {
            VEHICLE_TYPE_SCOOTER => "Scooter",
            VEHICLE_TYPE_BIKE => "Bike",
            other => {
                return Err(AppError::UnknownCategory(format!(
                    "vehicleType fuera de rango: {}",
                    other
                )))
            }
        };
        let target_code = self.predictor.type_code(category)?;

        let band = two_wheeler_band(age, salary);
        debug!(
            "Banda para edad {} / salario {}: [{}, {}]",
            age, salary, band.min, band.max
        );

        let mut results = Vec::new();
        for vehicle in &self.datasets.vehicles {
            if self.predictor.type_code(&vehicle.category)? != target_code {
                continue;
            }
            let predicted = self.predictor.predict_price(vehicle)?;
            if band.contains(predicted) {
                results.push(RecommendationResult {
                    name: vehicle.name.clone(),
                    price: predicted,
                    mileage: vehicle.mileage,
                    fuel: vehicle.fuel.clone(),
                });
            }
        }

        Ok(results)
    }
}
