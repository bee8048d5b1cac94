//! Tests de integración del endpoint /recommend
//!
//! Montan el router real con datasets sintéticos y lo ejercitan con
//! tower::ServiceExt::oneshot, sin red.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_advisor::analysis::PricePredictor;
use vehicle_advisor::api;
use vehicle_advisor::config::EnvironmentConfig;
use vehicle_advisor::datasets::Datasets;
use vehicle_advisor::models::{CarRecord, VehicleRecord};
use vehicle_advisor::state::AppState;

fn car(name: &str, price: f64) -> CarRecord {
    CarRecord {
        name: name.to_string(),
        variant: "ZX".to_string(),
        fuel: "Petrol".to_string(),
        mileage: 18.0,
        price,
    }
}

/// Dos ruedas con precio exactamente lineal en los features codificados,
/// para que las predicciones del modelo sean deterministas
fn linear_vehicles() -> Vec<VehicleRecord> {
    // price = 50000 + 40000*type + 5000*fuel + 1000*mileage
    let rows = [
        ("Honda Activa 6G", "Scooter", "Petrol", 45.0),   // 95000
        ("TVS Jupiter", "Scooter", "Petrol", 30.0),       // 80000
        ("Ola S1", "Scooter", "Electric", 80.0),          // 135000
        ("Bajaj Pulsar 150", "Bike", "Petrol", 48.0),     // 138000
        ("Hero Splendor Plus", "Bike", "Petrol", 5.0),    // 95000
        ("Revolt RV400", "Bike", "Electric", 35.0),       // 130000
    ];
    rows.iter()
        .map(|(name, category, fuel, mileage)| {
            let type_code = if *category == "Bike" { 1.0 } else { 0.0 };
            let fuel_code = if *fuel == "Electric" { 1.0 } else { 0.0 };
            VehicleRecord {
                name: name.to_string(),
                category: category.to_string(),
                fuel: fuel.to_string(),
                mileage: *mileage,
                price: 50000.0 + 40000.0 * type_code + 5000.0 * fuel_code + 1000.0 * mileage,
            }
        })
        .collect()
}

fn test_app() -> Router {
    let datasets = Arc::new(Datasets {
        vehicles: linear_vehicles(),
        cars: vec![
            car("Maruti Swift", 800_000.0),
            car("Hyundai Creta", 1_500_000.0),
            car("Tata Safari", 2_500_000.0),
        ],
    });
    let predictor = Arc::new(PricePredictor::fit(&datasets.vehicles).unwrap());
    let state = AppState::from_parts(EnvironmentConfig::default(), datasets, predictor);
    api::create_api_router().with_state(state)
}

async fn post_recommend(body: Value) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recommend")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "vehicle-advisor");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["vehicles"], 6);
}

#[tokio::test]
async fn test_scooter_recommendation_within_band() {
    // 25 / 80000 -> banda [100000, 200000]: solo la Ola S1 (135000 predicho)
    let (status, body) =
        post_recommend(json!({"age": 25, "salary": 80000, "vehicleType": 0})).await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Ola S1");
    assert_eq!(results[0]["fuel"], "Electric");
    assert!((results[0]["price"].as_f64().unwrap() - 135_000.0).abs() < 1.0);
}

#[tokio::test]
async fn test_car_recommendation_uses_literal_prices() {
    let (status, body) =
        post_recommend(json!({"age": 30, "salary": 120000, "vehicleType": 2})).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Maruti Swift", "Hyundai Creta"]);
}

#[tokio::test]
async fn test_rejection_branches_return_empty_array() {
    // Menor de edad para dos ruedas
    let (status, body) =
        post_recommend(json!({"age": 17, "salary": 80000, "vehicleType": 1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // 18 exacto se rechaza para coches
    let (status, body) =
        post_recommend(json!({"age": 18, "salary": 120000, "vehicleType": 2})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Salario bajo el guard de coches
    let (status, body) =
        post_recommend(json!({"age": 30, "salary": 60000, "vehicleType": 2})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_out_of_range_vehicle_type_is_request_error() {
    let (status, body) =
        post_recommend(json!({"age": 25, "salary": 80000, "vehicleType": 7})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "UNKNOWN_CATEGORY");
}

#[tokio::test]
async fn test_malformed_body_is_a_type_error() {
    // Campos con tipo incorrecto se rechazan en deserialización
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recommend")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"age": "twenty", "salary": 80000, "vehicleType": 0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
