//! Cliente de terminal del Vehicle Advisor
//!
//! Tres vistas: formulario, recomendaciones y showrooms. Una llamada al
//! backend por envío; los errores de transporte se muestran y la vista
//! no cambia.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use dotenvy::dotenv;

use vehicle_advisor::client::AdvisorClient;
use vehicle_advisor::config::EnvironmentConfig;
use vehicle_advisor::dto::RecommendationRequest;
use vehicle_advisor::ui::{render, showrooms, Session, VehicleTypeChoice, View};
use vehicle_advisor::utils::errors::AppError;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EnvironmentConfig::default();
    let client = AdvisorClient::new(config.advisor_url.clone());
    let mut session = Session::new();

    println!("🚘 AI Vehicle Recommendation System");
    println!("===================================");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match session.view {
            View::Home => {
                if !home_view(&mut session, &client, &mut lines).await? {
                    break;
                }
            }
            View::Recommendations => {
                if !recommendations_view(&mut session, &mut lines)? {
                    break;
                }
            }
            View::Showrooms => {
                if !showrooms_view(&mut session, &config, &mut lines)? {
                    break;
                }
            }
        }
    }

    println!("👋 Hasta pronto");
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None), // EOF
    }
}

/// Vista 1: formulario de entrada. Devuelve false para salir.
async fn home_view(
    session: &mut Session,
    client: &AdvisorClient,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    let Some(age_input) = prompt(lines, "Enter your age (q para salir)")? else {
        return Ok(false);
    };
    if age_input.trim().eq_ignore_ascii_case("q") {
        return Ok(false);
    }
    let Ok(age) = age_input.trim().parse::<u32>() else {
        println!("⚠️  Edad no válida");
        return Ok(true);
    };

    let Some(salary_input) = prompt(lines, "Enter your monthly salary (₹)")? else {
        return Ok(false);
    };
    let Ok(salary) = salary_input.trim().parse::<f64>() else {
        println!("⚠️  Salario no válido");
        return Ok(true);
    };

    let Some(type_input) = prompt(lines, "Preferred vehicle type [Scooter/Bike/Car]")? else {
        return Ok(false);
    };
    let Some(choice) = VehicleTypeChoice::parse(&type_input) else {
        println!("⚠️  Tipo no válido, usa Scooter, Bike o Car");
        return Ok(true);
    };

    // Rechazo local, sin llamada al servicio
    if age < 18 {
        println!("⚠️  No recommended vehicles for age under 18.");
        return Ok(true);
    }

    let request = RecommendationRequest {
        age,
        salary,
        vehicle_type: choice.code(),
    };

    println!("⏳ Fetching recommendations...");
    match client.recommend(&request).await {
        Ok(results) => session.submit(choice, results),
        Err(e) => {
            // La vista no cambia si el backend falla
            println!("❌ Backend error: {:#}", e);
        }
    }
    Ok(true)
}

/// Vista 2: tarjetas de recomendaciones con EMI
fn recommendations_view(
    session: &mut Session,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    println!();
    println!("═══ Recommended Vehicles ═══");

    if session.recommendations.is_empty() {
        println!("⚠️  No recommendations found.");
    } else {
        for result in &session.recommendations {
            println!("{}", render::vehicle_card(result));
        }
    }

    let options = if session.show_showroom_panel {
        "[v] view showrooms, [b] back, [q] quit"
    } else {
        "[s] showroom info, [b] back, [q] quit"
    };
    let Some(input) = prompt(lines, options)? else {
        return Ok(false);
    };

    match input.trim().to_lowercase().as_str() {
        "s" => session.toggle_showroom_panel(true),
        "v" => session.open_showrooms(),
        "b" => session.back_home(),
        "q" => return Ok(false),
        _ => {}
    }
    Ok(true)
}

/// Vista 3: showrooms de las marcas recomendadas
fn showrooms_view(
    session: &mut Session,
    config: &EnvironmentConfig,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    println!();
    println!("═══ Available Showrooms for Recommended Vehicles ═══");

    let brands = showrooms::recommended_brands(&session.recommendations);
    let category = session
        .vehicle_type
        .map(|t| t.showroom_category())
        .unwrap_or("two-wheeler");

    let showroom_path = config.showroom_csv.clone();
    match session.showrooms(&showroom_path) {
        Ok(all_showrooms) => {
            let matches = showrooms::filter_showrooms(all_showrooms, &brands, category);
            if matches.is_empty() {
                println!("⚠️  No showroom info available for these vehicles.");
            } else {
                for (i, showroom) in matches.iter().enumerate() {
                    println!("{}", render::showroom_card(i, showroom));
                }
            }
        }
        Err(AppError::MissingColumn(col)) => {
            // Degrada a cero filas con error visible, la sesión sigue viva
            println!("❌ Showroom data missing '{}' column.", col);
        }
        Err(e) => {
            println!("❌ No se pudo cargar el directorio de showrooms: {}", e);
        }
    }

    let Some(input) = prompt(lines, "[b] back to recommendations, [q] quit")? else {
        return Ok(false);
    };
    match input.trim().to_lowercase().as_str() {
        "q" => return Ok(false),
        _ => session.back_to_recommendations(),
    }
    Ok(true)
}
