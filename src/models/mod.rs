//! Modelos de datos
//!
//! Este módulo contiene los registros de los datasets estáticos.

pub mod showroom;
pub mod vehicle;

pub use showroom::ShowroomRecord;
pub use vehicle::{CarRecord, VehicleRecord};
