//! Vehicle Advisor
//!
//! Sistema de recomendación de vehículos en dos piezas: un backend que
//! entrena una regresión lineal sobre el catálogo y sirve POST /recommend,
//! y un cliente de terminal que recoge edad, salario y tipo de vehículo,
//! muestra las recomendaciones con EMI y busca showrooms cercanos.

pub mod analysis;
pub mod api;
pub mod client;
pub mod config;
pub mod datasets;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;
pub mod utils;
