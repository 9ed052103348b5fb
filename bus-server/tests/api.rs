//! HTTP-level tests for the query service.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bus_server::catalog::{Catalog, Route};
use bus_server::web::{AppState, create_router};

fn test_app() -> Router {
    let catalog = Catalog::from_routes(vec![
        Route {
            name: "Tirupati".to_string(),
            departure_times: vec!["06:00".to_string(), "14:00".to_string()],
            bus_type: "Express".to_string(),
        },
        Route {
            name: "Bangalore".to_string(),
            departure_times: vec!["05:30".to_string()],
            bus_type: "Deluxe".to_string(),
        },
    ]);
    create_router(AppState::new(catalog))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_check_reports_running() {
    let (status, body) = get(test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Bus agent is running");
}

#[tokio::test]
async fn misspelled_destination_returns_route() {
    let (status, body) = get(test_app(), "/bus?destination=tirupathi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "Tirupati");
    assert_eq!(body["departure_times"][0], "06:00");
    assert_eq!(body["departure_times"][1], "14:00");
    assert_eq!(body["bus_type"], "Express");
}

#[tokio::test]
async fn query_with_extra_words_returns_route() {
    let (status, body) =
        get(test_app(), "/bus?destination=MADANAPALLI%20TO%20TIRUPATI").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "Tirupati");
}

#[tokio::test]
async fn unknown_destination_returns_message_not_error() {
    let (status, body) = get(test_app(), "/bus?destination=Chennai").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No buses found for 'Chennai'.");
    assert!(body.get("route").is_none());
}

#[tokio::test]
async fn single_character_destination_is_rejected() {
    let (status, body) = get(test_app(), "/bus?destination=a").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("destination"));
}

#[tokio::test]
async fn whitespace_only_destination_is_rejected() {
    // Trimming happens before the length check.
    let (status, _) = get(test_app(), "/bus?destination=%20%20b%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_destination_is_rejected() {
    let response = test_app()
        .oneshot(Request::builder().uri("/bus").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn match_payload_has_no_extra_fields() {
    let (_, body) = get(test_app(), "/bus?destination=bangalore").await;

    let object = body.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["bus_type", "departure_times", "route"]);
}
