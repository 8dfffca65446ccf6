//! HTTP tests for the booking and tracking endpoints

use aldiron_logistics::config::Config;
use aldiron_logistics::error::ErrorResponse;
use aldiron_logistics::handlers::{AppState, panic_response, router};
use aldiron_logistics::models::{BookingConfirmation, TimelineMarker, TrackingView};
use axum::Router;
use axum::routing::get as get_route;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

fn app(expose_sample_numbers: bool) -> Router {
    let config = Config {
        expose_sample_numbers,
        ..Config::default()
    };
    router(AppState::from_config(&config))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

fn booking_body() -> Value {
    json!({
        "name": "Rina Kartika",
        "email": "rina@example.co.id",
        "mobile": "+62 812-3456-7890",
        "origin": "Samarinda",
        "destination": "Jakarta",
        "weight": "5 kg",
        "service": "Express",
        "description": "Dokumen"
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(true), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("running"));
}

#[tokio::test]
async fn test_booking_is_confirmed() {
    let (status, body) = send(app(true), post_json("/api/bookings", booking_body())).await;
    assert_eq!(status, StatusCode::CREATED);

    let confirmation: BookingConfirmation = parse(&body);
    assert!(confirmation.tracking_number.is_well_formed());
    assert_eq!(confirmation.origin, "Samarinda");
    assert_eq!(confirmation.description.as_deref(), Some("Dokumen"));

    let raw: Value = parse(&body);
    assert!(raw.get("trackingNumber").is_some());
    assert!(raw.get("submittedAt").is_some());
}

#[tokio::test]
async fn test_booking_missing_fields() {
    let mut body = booking_body();
    body["origin"] = json!("");
    body.as_object_mut().unwrap().remove("service");

    let (status, body) = send(app(true), post_json("/api/bookings", body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "missing_field");
    assert_eq!(error.details, vec!["origin", "service"]);
}

#[tokio::test]
async fn test_booking_invalid_email_and_phone() {
    let mut body = booking_body();
    body["email"] = json!("a@b");
    let (status, response) = send(app(true), post_json("/api/bookings", body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(parse::<ErrorResponse>(&response).error, "invalid_email");

    let mut body = booking_body();
    body["mobile"] = json!("12345");
    let (status, response) = send(app(true), post_json("/api/bookings", body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(parse::<ErrorResponse>(&response).error, "invalid_phone");
}

#[tokio::test]
async fn test_track_by_path() {
    let (status, body) = send(app(true), get("/api/tracking/ALR001234567")).await;
    assert_eq!(status, StatusCode::OK);

    let view: TrackingView = parse(&body);
    assert_eq!(view.status, "delivered");
    assert_eq!(view.timeline.len(), 6);
    assert_eq!(view.timeline[0].marker, TimelineMarker::Current);
    assert_eq!(view.timeline[0].status, "Package Delivered");
}

#[tokio::test]
async fn test_track_by_form_is_case_insensitive() {
    let (status, body) = send(
        app(true),
        post_json("/api/tracking", json!({ "trackingNumber": " alr001234567 " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<TrackingView>(&body).tracking_number.as_str(), "ALR001234567");
}

#[tokio::test]
async fn test_track_blank_form() {
    let (status, body) = send(
        app(true),
        post_json("/api/tracking", json!({ "trackingNumber": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse::<ErrorResponse>(&body).error, "empty_tracking_input");
}

#[tokio::test]
async fn test_track_unknown_number_lists_samples() {
    let (status, body) = send(app(true), get("/api/tracking/ALR999999999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "tracking_not_found");
    assert_eq!(error.details.len(), 4);
    assert!(error.details.contains(&"ALR001234567".to_string()));
}

#[tokio::test]
async fn test_track_unknown_number_without_samples() {
    let (status, body) = send(app(false), get("/api/tracking/ALR999999999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: ErrorResponse = parse(&body);
    assert!(error.details.is_empty());
    assert!(!error.message.contains("ALR001234567"));
}

#[tokio::test]
async fn test_booking_with_null_field_is_bad_request() {
    let (status, body) = send(
        app(true),
        post_json("/api/bookings", json!({ "name": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "bad_request");
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn test_tracking_without_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/tracking")
        .body(Body::from(r#"{"trackingNumber":"ALR001234567"}"#))
        .unwrap();

    let (status, body) = send(app(true), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse::<ErrorResponse>(&body).error, "bad_request");
}

#[tokio::test]
async fn test_tracking_with_broken_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/tracking")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"trackingNumber\":"))
        .unwrap();

    let (status, body) = send(app(true), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse::<ErrorResponse>(&body).error, "bad_request");
}

async fn panicking_handler() -> &'static str {
    panic!("lookup table corrupted")
}

#[tokio::test]
async fn test_handler_panic_becomes_internal_error() {
    let app = Router::new()
        .route("/boom", get_route(panicking_handler))
        .layer(CatchPanicLayer::custom(panic_response));

    let (status, body) = send(app, get("/boom")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = parse(&body);
    assert_eq!(error.error, "internal");
    assert_eq!(error.message, "Internal server error");
}
