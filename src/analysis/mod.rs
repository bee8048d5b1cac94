//! Análisis: encoders y modelo de precios

pub mod encoder;
pub mod predictor;
pub mod regression;

pub use encoder::LabelEncoder;
pub use predictor::PricePredictor;
pub use regression::{r2_score, LinearRegression};
