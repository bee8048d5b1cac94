//! Codificación de variables categóricas
//!
//! Asigna un índice entero a cada valor categórico en el orden en que se
//! observa por primera vez durante el entrenamiento. Un valor no visto en
//! inferencia es un error del request, no del proceso.

use std::collections::HashMap;

use crate::utils::errors::{AppError, AppResult};

/// Mapa de etiquetas a códigos enteros
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    codes: HashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelEncoder {
    /// Construir el encoder a partir de los valores observados, en orden de
    /// primera aparición
    pub fn fit<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut codes = HashMap::new();
        let mut labels = Vec::new();

        for value in values {
            if !codes.contains_key(value) {
                codes.insert(value.to_string(), labels.len());
                labels.push(value.to_string());
            }
        }

        Self { codes, labels }
    }

    /// Código entero de una etiqueta ya observada
    pub fn transform(&self, value: &str) -> AppResult<usize> {
        self.codes
            .get(value)
            .copied()
            .ok_or_else(|| AppError::UnknownCategory(value.to_string()))
    }

    /// Número de etiquetas distintas
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Etiqueta asociada a un código
    pub fn label(&self, code: usize) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }
}
