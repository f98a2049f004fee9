//! HTTP tests for the nutrition API, driven through the router without a socket.

use std::error::Error;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use nutrition_advisor::api::create_api;
use nutrition_advisor::food::FoodAnalyzer;
use serde_json::{json, Value};
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn Error>>;

fn app() -> Router {
    create_api(Arc::new(FoodAnalyzer::offline()))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value), Box<dyn Error>> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_string(&value)?)
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

#[tokio::test]
async fn test_analyze_chicken_by_name() -> TestResult {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/analyze",
        Some(json!({ "foodName": "치킨" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["food"], "치킨");
    assert_eq!(body["source"], "exactMatch");
    assert_eq!(body["nutrition"]["calories"], 250.0);
    assert_eq!(body["nutrition"]["protein"], 25.0);
    assert_eq!(body["nutrition"]["minerals"]["calcium"], 20.0);

    let recommendations = body["recommendations"]
        .as_array()
        .ok_or("recommendations is not an array")?;
    let summaries: Vec<&str> = recommendations
        .iter()
        .filter_map(|s| s["nutrition"].as_str())
        .collect();
    assert!(summaries.contains(&"칼슘, 단백질"));
    assert!(!summaries.contains(&"오메가3, 단백질"));
    Ok(())
}

#[tokio::test]
async fn test_analyze_alias_reports_matched_name() -> TestResult {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/analyze",
        Some(json!({ "foodName": "Kimchi Stew" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["food"], "Kimchi Stew");
    assert_eq!(body["matchedName"], "김치찌개");
    assert_eq!(body["nutrition"]["calories"], 320.0);
    Ok(())
}

#[tokio::test]
async fn test_unknown_food_falls_back_to_placeholder_values() -> TestResult {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/analyze",
        Some(json!({ "foodName": "xyzzy" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "randomFallback");
    let calories = body["nutrition"]["calories"]
        .as_f64()
        .ok_or("calories is not a number")?;
    assert!((150.0..=450.0).contains(&calories));
    Ok(())
}

#[tokio::test]
async fn test_image_without_recognizer_returns_placeholder() -> TestResult {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/analyze",
        Some(json!({ "image": "data:image/png;base64,AAAA" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "recognitionUnavailable");
    assert_eq!(body["nutrition"]["calories"], 0.0);
    assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_missing_input_is_bad_request() -> TestResult {
    let (status, body) = send(app(), Method::POST, "/api/analyze", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(
        app(),
        Method::POST,
        "/api/analyze",
        Some(json!({ "foodName": "   " })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_overlong_name_is_bad_request() -> TestResult {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/analyze",
        Some(json!({ "foodName": "a".repeat(101) })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() -> TestResult {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_list_foods_in_table_order() -> TestResult {
    let (status, body) = send(app(), Method::GET, "/api/foods", None).await?;
    assert_eq!(status, StatusCode::OK);

    let names = body.as_array().ok_or("foods is not an array")?;
    assert_eq!(names.len(), 20);
    assert_eq!(names[0], "김치찌개");
    assert!(names.iter().any(|n| n == "치킨"));
    Ok(())
}

#[tokio::test]
async fn test_health() -> TestResult {
    let (status, body) = send(app(), Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}
