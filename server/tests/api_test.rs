//! HTTP integration tests for the carrier sales API
//!
//! Each test spins the real server on an ephemeral port and drives it with
//! reqwest, asserting the exact status codes and bodies of the API contract.

mod helpers;

use helpers::{base_url, spawn_demo_server};
use reqwest::StatusCode;
use serde_json::{Value, json};
use server::middleware::ApiKeyGate;
use shared::LoadRecord;

async fn demo_server_url() -> String {
    base_url(spawn_demo_server(ApiKeyGate::open()).await)
}

#[tokio::test]
async fn test_verify_known_carrier() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/verify-carrier"))
        .json(&json!({"mc_number": "MC123456"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["verified"], json!(true));
    assert_eq!(body["carrier_name"], json!("ABC Trucking"));
}

#[tokio::test]
async fn test_verify_trims_surrounding_whitespace() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/verify-carrier"))
        .json(&json!({"mc_number": "  MC789012  "}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["carrier_name"], json!("XYZ Freight"));
}

#[tokio::test]
async fn test_verify_unknown_carrier_is_404() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/verify-carrier"))
        .json(&json!({"mc_number": "MC999999"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], json!("Carrier not found in our database."));
}

#[tokio::test]
async fn test_verify_missing_prefix_is_400() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/verify-carrier"))
        .json(&json!({"mc_number": "123456"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["detail"],
        json!("Invalid MC number format. Must start with 'MC'.")
    );
}

#[tokio::test]
async fn test_get_load_returns_the_full_record() {
    let url = demo_server_url().await;

    let response = reqwest::get(format!("{url}/loads/REF09460")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let load: LoadRecord = response.json().await.unwrap();
    assert_eq!(
        load,
        LoadRecord {
            reference_number: "REF09460".to_string(),
            origin: "Denver, CO".to_string(),
            destination: "Detroit, MI".to_string(),
            equipment_type: "Dry Van".to_string(),
            rate: 868,
            commodity: "Automotive Parts".to_string(),
            mc_number: "MC123456".to_string(),
            is_partial: true,
            pickup_time: "15:00".to_string(),
            delivery_time: "Friday, July 12th".to_string(),
        }
    );
}

#[tokio::test]
async fn test_get_load_accepts_all_reference_spellings() {
    let url = demo_server_url().await;

    for reference in ["REF09460", "ref09460", "09460", "9460"] {
        let response = reqwest::get(format!("{url}/loads/{reference}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "reference {reference}");

        let load: LoadRecord = response.json().await.unwrap();
        assert_eq!(load.reference_number, "REF09460", "reference {reference}");
    }
}

#[tokio::test]
async fn test_get_unknown_load_is_404() {
    let url = demo_server_url().await;

    let response = reqwest::get(format!("{url}/loads/REF99999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], json!("Load not found"));
}

#[tokio::test]
async fn test_get_load_with_empty_key_is_400() {
    let url = demo_server_url().await;

    for reference in ["REF000", "000", "REF"] {
        let response = reqwest::get(format!("{url}/loads/{reference}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "reference {reference}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["detail"], json!("Invalid reference number."), "reference {reference}");
    }
}

#[tokio::test]
async fn test_evaluate_offer_accepts_at_or_above_our_price() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/evaluate-offer"))
        .json(&json!({"carrier_offer": 800, "our_last_offer": 700, "offer_attempt": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"], json!("accept"));
    assert_eq!(body["new_offer"], json!(800));
    assert_eq!(body["message"], json!("Offer accepted."));
}

#[tokio::test]
async fn test_evaluate_offer_first_counter() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/evaluate-offer"))
        .json(&json!({"carrier_offer": 600, "our_last_offer": 700, "offer_attempt": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"], json!("counter"));
    assert_eq!(body["new_offer"], json!(650));
    assert_eq!(body["message"], json!("We can go as low as 650 on this load."));
}

#[tokio::test]
async fn test_evaluate_offer_later_attempts_are_final() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/evaluate-offer"))
        .json(&json!({"carrier_offer": 600, "our_last_offer": 700, "offer_attempt": 2}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["result"], json!("counter"));
    assert_eq!(body["new_offer"], json!(650));
    assert_eq!(body["message"], json!("This is our final counter at 650."));
}

#[tokio::test]
async fn test_evaluate_offer_attempt_defaults_to_first() {
    let url = demo_server_url().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{url}/evaluate-offer"))
        .json(&json!({"carrier_offer": 600, "our_last_offer": 700}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], json!("We can go as low as 650 on this load."));
}

#[tokio::test]
async fn test_health_endpoint_reports_state() {
    let url = demo_server_url().await;

    let response = reqwest::get(format!("{url}/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["loads_available"], json!(4));
    assert!(body["timestamp"].is_string());
    assert!(body["requests"]["verify_carrier"].is_number());
}
