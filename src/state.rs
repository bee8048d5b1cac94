//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo es de solo lectura después del
//! arranque: no hay locks ni estado mutable entre requests.

use std::sync::Arc;

use crate::analysis::PricePredictor;
use crate::config::EnvironmentConfig;
use crate::datasets::Datasets;
use crate::services::RecommendationService;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub datasets: Arc<Datasets>,
    pub predictor: Arc<PricePredictor>,
    pub recommendations: RecommendationService,
}

impl AppState {
    /// Cargar datasets, entrenar el modelo y armar el estado compartido
    pub fn initialize(config: EnvironmentConfig) -> AppResult<Self> {
        let datasets = Arc::new(Datasets::load(&config)?);
        let predictor = Arc::new(PricePredictor::fit(&datasets.vehicles)?);
        Ok(Self::from_parts(config, datasets, predictor))
    }

    /// Armar el estado a partir de componentes ya construidos (tests)
    pub fn from_parts(
        config: EnvironmentConfig,
        datasets: Arc<Datasets>,
        predictor: Arc<PricePredictor>,
    ) -> Self {
        let recommendations = RecommendationService::new(datasets.clone(), predictor.clone());
        Self {
            config,
            datasets,
            predictor,
            recommendations,
        }
    }
}
