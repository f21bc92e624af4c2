//! Charge endpoint integration tests for charging-service.

mod common;

use common::{charge_body, TestApp};
use reqwest::StatusCode;

#[tokio::test]
async fn working_day_service_is_charged_for_weekdays_only() {
    let app = TestApp::spawn().await;

    // Monday through Friday, 5 working days at 0.2.
    let response = app
        .post_charge(&charge_body(1, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 1.0);
    let info = body["info"].as_array().unwrap();
    assert_eq!(info.len(), 1);
    assert!(info[0].as_str().unwrap().contains("service A"));
}

#[tokio::test]
async fn free_days_shift_the_charging_start() {
    let app = TestApp::spawn().await;

    // Two free days push the start to Wednesday; 3 days remain.
    let response = app
        .post_charge(&charge_body(2, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 0.6);
}

#[tokio::test]
async fn discount_over_the_whole_window_halves_the_charge() {
    let app = TestApp::spawn().await;

    // 5 working days at 0.24, all at 50% off.
    let response = app
        .post_charge(&charge_body(3, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 0.6);
}

#[tokio::test]
async fn unknown_service_contributes_zero_but_others_still_compute() {
    let app = TestApp::spawn().await;

    let response = app
        .post_charge(&charge_body(4, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 1.0);
    let info = body["info"].as_array().unwrap();
    assert_eq!(info.len(), 2);
    assert!(info[0].as_str().unwrap().contains("service A"));
    assert!(info[1].as_str().unwrap().contains("does not exist"));
}

#[tokio::test]
async fn customer_without_subscriptions_is_charged_nothing() {
    let app = TestApp::spawn().await;

    let response = app
        .post_charge(&charge_body(5, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 0.0);
    assert!(body["info"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn inverted_interval_yields_zero_charge_not_an_error() {
    let app = TestApp::spawn().await;

    let response = app
        .post_charge(&charge_body(1, "2019-01-09", "2019-01-08"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 0.0);
    let info = body["info"].as_array().unwrap();
    assert_eq!(info.len(), 1);
    assert!(info[0].as_str().unwrap().contains("after end_date"));
}

#[tokio::test]
async fn malformed_start_date_is_rejected_before_computation() {
    let app = TestApp::spawn().await;

    let response = app
        .post_charge(&charge_body(1, "2019/01/01", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("start_date"));
}

#[tokio::test]
async fn malformed_end_date_is_rejected_before_computation() {
    let app = TestApp::spawn().await;

    let response = app
        .post_charge(&charge_body(1, "2019-01-07", "2019-1-11"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("end_date"));
}

#[tokio::test]
async fn unknown_customer_is_a_not_found_condition() {
    let app = TestApp::spawn().await;

    let response = app
        .post_charge(&charge_body(999, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn nonpositive_customer_id_fails_validation() {
    let app = TestApp::spawn().await;

    let response = app
        .post_charge(&charge_body(0, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn root_route_serves_the_original_endpoint() {
    let app = TestApp::spawn().await;

    let response = reqwest::Client::new()
        .post(format!("{}/", app.address))
        .json(&charge_body(1, "2019-01-07", "2019-01-11"))
        .send()
        .await
        .expect("Failed to send charge request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 1.0);
}

#[tokio::test]
async fn identical_requests_return_identical_responses() {
    let app = TestApp::spawn().await;
    let body = charge_body(3, "2019-01-01", "2019-03-31");

    let first: serde_json::Value = app.post_charge(&body).await.json().await.unwrap();
    let second: serde_json::Value = app.post_charge(&body).await.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn service_specific_start_date_limits_the_charged_days() {
    let data = r#"{
      "Customers": [
        {
          "id": 10,
          "services": [{ "name": "A", "start_date": "2019-01-10" }]
        },
        {
          "id": 11,
          "services": [{ "name": "A", "start_date": "2019-06-01" }]
        }
      ]
    }"#;
    let app = TestApp::spawn_with_data(data).await;

    // Start raised to Thursday the 10th: two working days at 0.2.
    let response = app
        .post_charge(&charge_body(10, "2019-01-07", "2019-01-11"))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 0.4);

    // Service starts after the queried period: nothing to charge.
    let response = app
        .post_charge(&charge_body(11, "2019-01-07", "2019-01-11"))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn configured_catalog_file_replaces_the_standard_offering() {
    let data = r#"{
      "Customers": [
        { "id": 30, "services": [{ "name": "X" }, { "name": "A" }] }
      ]
    }"#;
    let catalog = r#"[
      { "name": "X", "price": 1.0, "workingDays": false }
    ]"#;
    let app = TestApp::spawn_with_catalog(data, catalog).await;

    let response = app
        .post_charge(&charge_body(30, "2019-01-07", "2019-01-08"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    // Two calendar days of "X" at 1.0; "A" is unknown to this catalog.
    assert_eq!(body["charge_price"].as_f64().unwrap(), 2.0);
    let info = body["info"].as_array().unwrap();
    assert!(info[0].as_str().unwrap().contains("service X"));
    assert!(info[1].as_str().unwrap().contains("does not exist"));
}

#[tokio::test]
async fn duplicate_customer_ids_resolve_to_the_first_record() {
    let data = r#"{
      "Customers": [
        { "id": 40, "services": [{ "name": "A" }] },
        { "id": 40, "services": [{ "name": "B" }, { "name": "C" }] }
      ]
    }"#;
    let app = TestApp::spawn_with_data(data).await;

    let response = app
        .post_charge(&charge_body(40, "2019-01-07", "2019-01-11"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    // The first record's single "A" subscription is priced: 5 * 0.2.
    assert_eq!(body["charge_price"].as_f64().unwrap(), 1.0);
    let info = body["info"].as_array().unwrap();
    assert_eq!(info.len(), 1);
    assert!(info[0].as_str().unwrap().contains("service A"));
}

#[tokio::test]
async fn override_price_takes_precedence_over_base_price() {
    let data = r#"{
      "Customers": [
        { "id": 20, "services": [{ "name": "A", "price": 0.5 }] }
      ]
    }"#;
    let app = TestApp::spawn_with_data(data).await;

    let response = app
        .post_charge(&charge_body(20, "2019-01-07", "2019-01-11"))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["charge_price"].as_f64().unwrap(), 2.5);
}
