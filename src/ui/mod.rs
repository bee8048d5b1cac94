//! Aplicación cliente de terminal
//!
//! Máquina de vistas, renderizado de tarjetas y filtrado de showrooms.

pub mod app;
pub mod render;
pub mod showrooms;

pub use app::{Session, VehicleTypeChoice, View};
