//! Cliente HTTP del servicio de recomendaciones
//!
//! Este módulo contiene el cliente HTTP que usa la aplicación de terminal
//! para hablar con el backend. Una llamada bloqueante por envío de
//! formulario: sin retries, sin timeout configurado.

use anyhow::{Context, Result};
use reqwest::Client;

use crate::dto::{RecommendationRequest, RecommendationResult};

/// Cliente HTTP del Vehicle Advisor
pub struct AdvisorClient {
    client: Client,
    base_url: String,
}

impl AdvisorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Pedir recomendaciones al servicio
    ///
    /// Un fallo de transporte o un status de error se propaga al caller,
    /// que lo muestra al usuario sin reintentar.
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendationResult>> {
        let url = format!("{}/recommend", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("No se pudo conectar con el backend en {}", url))?;

        let response = response
            .error_for_status()
            .context("El backend respondió con error")?;

        response
            .json::<Vec<RecommendationResult>>()
            .await
            .context("Respuesta del backend no parseable")
    }
}
