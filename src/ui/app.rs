//! Estado de sesión del cliente
//!
//! La navegación es una máquina de estados explícita de tres vistas. Todo el
//! estado vive en la sesión del usuario y solo lo sobreescribe un nuevo
//! envío del formulario.

use crate::datasets::DatasetLoader;
use crate::dto::RecommendationResult;
use crate::models::ShowroomRecord;
use crate::utils::errors::AppResult;

/// Vista activa de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Recommendations,
    Showrooms,
}

/// Tipo de vehículo elegido en el formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleTypeChoice {
    Scooter,
    Bike,
    Car,
}

impl VehicleTypeChoice {
    /// Parsear la entrada del usuario ("scooter", "bike", "car")
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "scooter" | "0" => Some(Self::Scooter),
            "bike" | "1" => Some(Self::Bike),
            "car" | "2" => Some(Self::Car),
            _ => None,
        }
    }

    /// Código del wire: 0=Scooter, 1=Bike, 2=Car
    pub fn code(&self) -> u8 {
        match self {
            Self::Scooter => 0,
            Self::Bike => 1,
            Self::Car => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scooter => "Scooter",
            Self::Bike => "Bike",
            Self::Car => "Car",
        }
    }

    /// Categoría del directorio de showrooms: scooter y bike colapsan en
    /// "two-wheeler", car queda igual
    pub fn showroom_category(&self) -> &'static str {
        match self {
            Self::Scooter | Self::Bike => "two-wheeler",
            Self::Car => "car",
        }
    }
}

/// Estado de una sesión de usuario
pub struct Session {
    pub view: View,
    pub recommendations: Vec<RecommendationResult>,
    pub show_showroom_panel: bool,
    pub vehicle_type: Option<VehicleTypeChoice>,
    // Cache perezosa del directorio de showrooms
    showrooms: Option<Vec<ShowroomRecord>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Home,
            recommendations: Vec::new(),
            show_showroom_panel: false,
            vehicle_type: None,
            showrooms: None,
        }
    }

    /// Envío exitoso del formulario: guardar resultados y pasar a la vista
    /// de recomendaciones. En caso de error de transporte no se llama y la
    /// vista no cambia.
    pub fn submit(&mut self, choice: VehicleTypeChoice, results: Vec<RecommendationResult>) {
        self.vehicle_type = Some(choice);
        self.recommendations = results;
        self.view = View::Recommendations;
    }

    /// Volver al formulario; el estado persiste hasta el próximo envío
    pub fn back_home(&mut self) {
        self.view = View::Home;
    }

    pub fn toggle_showroom_panel(&mut self, visible: bool) {
        self.show_showroom_panel = visible;
    }

    /// Navegar a la vista de showrooms (solo desde recomendaciones)
    pub fn open_showrooms(&mut self) {
        if self.view == View::Recommendations && self.show_showroom_panel {
            self.view = View::Showrooms;
        }
    }

    pub fn back_to_recommendations(&mut self) {
        self.view = View::Recommendations;
    }

    /// Directorio de showrooms, cargado la primera vez que se necesita
    pub fn showrooms(&mut self, path: &str) -> AppResult<&[ShowroomRecord]> {
        if self.showrooms.is_none() {
            let loader = DatasetLoader::new();
            self.showrooms = Some(loader.load_showrooms(path)?);
        }
        Ok(self.showrooms.as_deref().unwrap_or_default())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> RecommendationResult {
        RecommendationResult {
            name: name.to_string(),
            price: 100_000.0,
            mileage: 45.0,
            fuel: "Petrol".to_string(),
        }
    }

    #[test]
    fn test_submit_transitions_to_recommendations() {
        let mut session = Session::new();
        session.submit(VehicleTypeChoice::Bike, vec![result("Bajaj Pulsar 150")]);

        assert_eq!(session.view, View::Recommendations);
        assert_eq!(session.vehicle_type, Some(VehicleTypeChoice::Bike));
        assert_eq!(session.recommendations.len(), 1);
    }

    #[test]
    fn test_back_home_keeps_state() {
        let mut session = Session::new();
        session.submit(VehicleTypeChoice::Scooter, vec![result("Honda Activa 6G")]);
        session.back_home();

        assert_eq!(session.view, View::Home);
        assert_eq!(session.recommendations.len(), 1);
        assert_eq!(session.vehicle_type, Some(VehicleTypeChoice::Scooter));
    }

    #[test]
    fn test_showrooms_only_reachable_with_panel_visible() {
        let mut session = Session::new();
        session.submit(VehicleTypeChoice::Car, vec![result("Maruti Swift")]);

        session.open_showrooms();
        assert_eq!(session.view, View::Recommendations);

        session.toggle_showroom_panel(true);
        session.open_showrooms();
        assert_eq!(session.view, View::Showrooms);

        session.back_to_recommendations();
        assert_eq!(session.view, View::Recommendations);
    }

    #[test]
    fn test_vehicle_type_parse_and_mapping() {
        assert_eq!(VehicleTypeChoice::parse("Scooter"), Some(VehicleTypeChoice::Scooter));
        assert_eq!(VehicleTypeChoice::parse(" bike "), Some(VehicleTypeChoice::Bike));
        assert_eq!(VehicleTypeChoice::parse("CAR"), Some(VehicleTypeChoice::Car));
        assert_eq!(VehicleTypeChoice::parse("truck"), None);

        assert_eq!(VehicleTypeChoice::Scooter.code(), 0);
        assert_eq!(VehicleTypeChoice::Bike.code(), 1);
        assert_eq!(VehicleTypeChoice::Car.code(), 2);

        assert_eq!(VehicleTypeChoice::Scooter.showroom_category(), "two-wheeler");
        assert_eq!(VehicleTypeChoice::Bike.showroom_category(), "two-wheeler");
        assert_eq!(VehicleTypeChoice::Car.showroom_category(), "car");
    }
}
