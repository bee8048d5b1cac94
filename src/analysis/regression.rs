//! Regresión lineal por mínimos cuadrados
//!
//! Ajuste OLS con intercepto sobre tres features, resolviendo las ecuaciones
//! normales (X'X) b = X'y por eliminación gaussiana con pivoteo parcial.
//! Suficiente para un modelo de 4 parámetros; no hace falta álgebra externa.

use crate::utils::errors::{AppError, AppResult};

/// Número de features del modelo: tipo codificado, fuel codificado, mileage
pub const NUM_FEATURES: usize = 3;

const NUM_PARAMS: usize = NUM_FEATURES + 1; // + intercepto

/// Modelo lineal ajustado: y = intercept + coef · x
#[derive(Debug, Clone)]
pub struct LinearRegression {
    pub intercept: f64,
    pub coefficients: [f64; NUM_FEATURES],
}

impl LinearRegression {
    /// Ajustar el modelo sobre las observaciones dadas
    pub fn fit(features: &[[f64; NUM_FEATURES]], targets: &[f64]) -> AppResult<Self> {
        if features.len() != targets.len() {
            return Err(AppError::Internal(format!(
                "Dimensiones inconsistentes: {} filas de features, {} targets",
                features.len(),
                targets.len()
            )));
        }
        if features.len() < NUM_PARAMS {
            return Err(AppError::Dataset(format!(
                "Se necesitan al menos {} observaciones para ajustar el modelo, hay {}",
                NUM_PARAMS,
                features.len()
            )));
        }

        // Ecuaciones normales: A = X'X (con columna de unos), b = X'y
        let mut a = [[0.0f64; NUM_PARAMS]; NUM_PARAMS];
        let mut b = [0.0f64; NUM_PARAMS];

        for (x, &y) in features.iter().zip(targets) {
            let row = [1.0, x[0], x[1], x[2]];
            for i in 0..NUM_PARAMS {
                for j in 0..NUM_PARAMS {
                    a[i][j] += row[i] * row[j];
                }
                b[i] += row[i] * y;
            }
        }

        let solution = solve(a, b)?;
        Ok(Self {
            intercept: solution[0],
            coefficients: [solution[1], solution[2], solution[3]],
        })
    }

    /// Predicción para un vector de features
    pub fn predict(&self, features: &[f64; NUM_FEATURES]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

/// Resolver A x = b por eliminación gaussiana con pivoteo parcial
fn solve(mut a: [[f64; NUM_PARAMS]; NUM_PARAMS], mut b: [f64; NUM_PARAMS]) -> AppResult<[f64; NUM_PARAMS]> {
    for col in 0..NUM_PARAMS {
        // Pivote: fila con mayor valor absoluto en esta columna
        let pivot = (col..NUM_PARAMS)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);

        if a[pivot][col].abs() < 1e-12 {
            return Err(AppError::Dataset(
                "Matriz singular: los features del dataset no tienen variación suficiente"
                    .to_string(),
            ));
        }

        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..NUM_PARAMS {
            let factor = a[row][col] / a[col][col];
            for k in col..NUM_PARAMS {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Sustitución hacia atrás
    let mut x = [0.0f64; NUM_PARAMS];
    for row in (0..NUM_PARAMS).rev() {
        let mut sum = b[row];
        for k in (row + 1)..NUM_PARAMS {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }

    Ok(x)
}

/// Coeficiente de determinación R² sobre el set de entrenamiento
///
/// Diagnóstico de arranque únicamente; no tiene efecto en runtime.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let n = y_true.len() as f64;
    if n == 0.0 {
        return 0.0;
    }

    let mean = y_true.iter().sum::<f64>() / n;
    let ss_tot: f64 = y_true.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(y, p)| (y - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}
