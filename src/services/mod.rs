//! Servicios de negocio

pub mod recommendation_service;

pub use recommendation_service::{two_wheeler_band, PriceBand, RecommendationService};
