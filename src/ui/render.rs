//! Renderizado de tarjetas en terminal
//!
//! Formatea recomendaciones y showrooms como texto. Las funciones devuelven
//! String para poder testearlas; el binario solo hace println.

use crate::dto::RecommendationResult;
use crate::models::ShowroomRecord;

/// Plazos de EMI en meses: 1, 3 y 5 años
pub const EMI_TERMS: [u32; 3] = [12, 36, 60];

/// Cuota mensual: división simple del precio entre los meses, sin interés
pub fn emi(price: f64, months: u32) -> f64 {
    price / months as f64
}

/// Formatear un importe con separadores de miles ("1,300,000")
pub fn format_amount(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Tarjeta de un vehículo recomendado con sus opciones de EMI
pub fn vehicle_card(result: &RecommendationResult) -> String {
    let mut card = String::new();
    card.push_str(&format!("┌─ {}\n", result.name));
    card.push_str(&format!("│  Price:   ₹{}\n", format_amount(result.price, 0)));
    card.push_str(&format!("│  Mileage: {} kmpl\n", result.mileage));
    card.push_str(&format!("│  Fuel:    {}\n", result.fuel));
    card.push_str("│  EMI options:\n");
    for months in EMI_TERMS {
        card.push_str(&format!(
            "│    {} years: ₹{}/month\n",
            months / 12,
            format_amount(emi(result.price, months), 2)
        ));
    }
    card.push_str("└─");
    card
}

/// Tarjeta de un showroom con su enlace de mapa
pub fn showroom_card(index: usize, showroom: &ShowroomRecord) -> String {
    format!(
        "{}. {}\n   Brand: {}\n   Type: {}\n   Location: {}\n   Pincode: {}\n   🗺️  {}",
        index + 1,
        showroom.showroom_name,
        showroom.brand,
        showroom.category,
        showroom.address,
        showroom.pincode,
        showroom.maps_url()
    )
}
