//! DTOs de la API

pub mod recommendation_dto;

pub use recommendation_dto::{
    RecommendationRequest, RecommendationResult, VEHICLE_TYPE_BIKE, VEHICLE_TYPE_CAR,
    VEHICLE_TYPE_SCOOTER,
};
