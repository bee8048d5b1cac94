//! Filtrado de showrooms
//!
//! Cruza el directorio de showrooms con las marcas de los vehículos
//! recomendados: la marca es el primer token del nombre, en minúsculas.

use std::collections::HashSet;

use crate::dto::RecommendationResult;
use crate::models::ShowroomRecord;

/// Marcas recomendadas: primer token del nombre de cada resultado
pub fn recommended_brands(results: &[RecommendationResult]) -> HashSet<String> {
    results
        .iter()
        .filter_map(|r| r.name.split_whitespace().next())
        .map(str::to_lowercase)
        .collect()
}

/// Showrooms cuya marca está recomendada y cuya categoría coincide con el
/// tipo normalizado ("two-wheeler" o "car"), sin distinguir mayúsculas
pub fn filter_showrooms<'a>(
    showrooms: &'a [ShowroomRecord],
    brands: &HashSet<String>,
    category: &str,
) -> Vec<&'a ShowroomRecord> {
    showrooms
        .iter()
        .filter(|s| brands.contains(&s.brand.to_lowercase()))
        .filter(|s| s.category.eq_ignore_ascii_case(category))
        .collect()
}
