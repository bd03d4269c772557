//! API integration tests
//!
//! Router tests drive the `/api` routes in-process over the in-memory room
//! store. The `#[ignore]`d tests at the bottom target a running server.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use reqwest::Client;
use roomdesk_server::{
    api,
    models::RoomDto,
    repository::{InMemoryRoomStore, RoomStore},
    telemetry, AppConfig, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

const BASE_URL: &str = "http://localhost:8080/api";

fn app() -> (Router, InMemoryRoomStore) {
    let store = InMemoryRoomStore::new();
    let state = AppState::new(AppConfig::default(), Arc::new(store.clone()));
    (Router::new().nest("/api", api::router(state)), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn header_str<'a>(response: &'a Response<Body>, name: &str) -> &'a str {
    response.headers().get(name).unwrap().to_str().unwrap()
}

fn new_room(number: &str, room_type: &str) -> Value {
    json!({
        "room_number": number,
        "room_type": room_type,
        "floor": 1,
        "description": null
    })
}

#[tokio::test]
async fn test_create_room_returns_201_with_location() {
    let (app, _) = app();

    let response = send(&app, "POST", "/api/rooms", Some(new_room("101", "AC"))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(header_str(&response, "location"), "/api/rooms/1");
    assert_eq!(header_str(&response, "x-roomdeskapp-alert"), "roomdeskApp.room.created");
    assert_eq!(header_str(&response, "x-roomdeskapp-params"), "1");

    let body = json_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["room_type"], "AC");
}

#[tokio::test]
async fn test_create_room_with_id_is_rejected() {
    let (app, store) = app();

    let mut room = new_room("101", "AC");
    room["id"] = json!(5);
    let response = send(&app, "POST", "/api/rooms", Some(room)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header_str(&response, "x-roomdeskapp-error"), "error.idexists");
    assert_eq!(header_str(&response, "x-roomdeskapp-params"), "room");

    let body = json_body(response).await;
    assert_eq!(body["entity_name"], "room");
    assert_eq!(body["error_key"], "idexists");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_room_rejects_malformed_body() {
    let (app, store) = app();

    let response = send(&app, "POST", "/api/rooms", Some(json!({"room_type": "SUITE"}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "POST", "/api/rooms", Some(new_room("", "AC"))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_update_without_id_creates() {
    let (created_app, created_store) = app();
    let (updated_app, updated_store) = app();

    let created = send(&created_app, "POST", "/api/rooms", Some(new_room("7", "NON_AC"))).await;
    let updated = send(&updated_app, "PUT", "/api/rooms", Some(new_room("7", "NON_AC"))).await;

    assert_eq!(updated.status(), StatusCode::CREATED);
    assert_eq!(header_str(&updated, "location"), header_str(&created, "location"));

    let a: RoomDto = created_store.find_one(1).await.unwrap().unwrap();
    let b: RoomDto = updated_store.find_one(1).await.unwrap().unwrap();
    assert_eq!(a.room_number, b.room_number);
    assert_eq!(a.room_type, b.room_type);
    assert_eq!(a.floor, b.floor);
}

#[tokio::test]
async fn test_update_replaces_room() {
    let (app, _) = app();
    send(&app, "POST", "/api/rooms", Some(new_room("101", "AC"))).await;

    let response = send(
        &app,
        "PUT",
        "/api/rooms",
        Some(json!({"id": 1, "room_number": "101B", "room_type": "NON_AC"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "x-roomdeskapp-alert"), "roomdeskApp.room.updated");
    assert_eq!(header_str(&response, "x-roomdeskapp-params"), "1");

    let body = json_body(response).await;
    assert_eq!(body["room_number"], "101B");
    assert_eq!(body["room_type"], "NON_AC");
    // Full replacement: omitted fields are cleared
    assert_eq!(body["floor"], Value::Null);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (app, _) = app();

    let mut room = new_room("101", "AC");
    room["id"] = json!(99);
    let response = send(&app, "PUT", "/api/rooms", Some(room)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_rooms_with_pagination_headers() {
    let (app, _) = app();
    for number in ["101", "102", "103"] {
        send(&app, "POST", "/api/rooms", Some(new_room(number, "AC"))).await;
    }

    let response = send(&app, "GET", "/api/rooms?page=0&size=2", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "x-total-count"), "3");
    assert_eq!(
        header_str(&response, "link"),
        "</api/rooms?page=1&size=2>; rel=\"next\",\
         </api/rooms?page=1&size=2>; rel=\"last\",\
         </api/rooms?page=0&size=2>; rel=\"first\""
    );

    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_rooms_sorted() {
    let (app, _) = app();
    for number in ["B", "C", "A"] {
        send(&app, "POST", "/api/rooms", Some(new_room(number, "AC"))).await;
    }

    let response = send(&app, "GET", "/api/rooms?sort=room_number,desc", None).await;
    let body = json_body(response).await;
    let numbers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["room_number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["C", "B", "A"]);

    let response = send(&app, "GET", "/api/rooms?sort=price", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_rooms_at_last_representable_page() {
    let (app, _) = app();
    send(&app, "POST", "/api/rooms", Some(new_room("101", "AC"))).await;

    let response = send(&app, "GET", "/api/rooms?page=9223372036854775807", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "x-total-count"), "1");
    let link = header_str(&response, "link");
    assert!(!link.contains("rel=\"next\""));
    assert!(link.contains("</api/rooms?page=0&size=20>; rel=\"last\""));
    assert_eq!(json_body(response).await, json!([]));
}

/// Malformed query and path values answer with the same JSON error body as
/// every other client error
#[tokio::test]
async fn test_malformed_parameters_use_error_body() {
    let (app, _) = app();
    send(&app, "POST", "/api/rooms", Some(new_room("101", "AC"))).await;

    for uri in [
        "/api/rooms?page=abc",
        "/api/rooms?size=1.5",
        "/api/rooms/abc",
        "/api/rooms/1/price?people=2",
        "/api/rooms/1/price?days=three&people=2",
        "/api/rooms/abc/price?days=3&people=2",
    ] {
        let response = send(&app, "GET", uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(header_str(&response, "content-type"), "application/json", "{}", uri);

        let body = json_body(response).await;
        assert_eq!(body["code"], 18, "{}", uri);
        assert_eq!(body["error"], "BadValue", "{}", uri);
        assert!(!body["message"].as_str().unwrap().is_empty(), "{}", uri);
    }

    let response = send(&app, "DELETE", "/api/rooms/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 18);
}

#[tokio::test]
async fn test_get_room() {
    let (app, _) = app();
    send(&app, "POST", "/api/rooms", Some(new_room("101", "AC"))).await;

    let response = send(&app, "GET", "/api/rooms/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["room_number"], "101");

    let response = send(&app, "GET", "/api/rooms/42", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_room_is_idempotent() {
    let (app, store) = app();
    send(&app, "POST", "/api/rooms", Some(new_room("101", "AC"))).await;

    for _ in 0..2 {
        let response = send(&app, "DELETE", "/api/rooms/1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header_str(&response, "x-roomdeskapp-alert"), "roomdeskApp.room.deleted");
        assert_eq!(header_str(&response, "x-roomdeskapp-params"), "1");
    }

    let response = send(&app, "DELETE", "/api/rooms/404", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_room_price() {
    let (app, _) = app();
    send(&app, "POST", "/api/rooms", Some(new_room("101", "AC"))).await;
    send(&app, "POST", "/api/rooms", Some(new_room("102", "NON_AC"))).await;

    let response = send(&app, "GET", "/api/rooms/1/price?days=3&people=2", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["price"], "2700");
    assert_eq!(body["room_type"], "AC");

    let body = json_body(send(&app, "GET", "/api/rooms/2/price?days=3&people=1", None).await).await;
    assert_eq!(body["price"], "1050");

    let body = json_body(send(&app, "GET", "/api/rooms/2/price?days=3&people=2", None).await).await;
    assert_eq!(body["price"], "120");

    let response = send(&app, "GET", "/api/rooms/9/price?days=3&people=2", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_readiness() {
    let (app, _) = app();

    let response = send(&app, "GET", "/api/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");

    let response = send(&app, "GET", "/api/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "memory");
}

#[tokio::test]
async fn test_requests_are_timed_per_endpoint() {
    let handle = telemetry::init_metrics().unwrap();
    let (app, _) = app();
    send(&app, "POST", "/api/rooms", Some(new_room("101", "NON_AC"))).await;
    send(&app, "GET", "/api/rooms/1/price?days=2&people=1", None).await;
    send(&app, "GET", "/api/rooms/77", None).await;

    let rendered = handle.render();
    assert!(rendered.contains("roomdesk_http_requests_total{"));
    assert!(rendered.contains("path=\"/api/rooms/:id/price\""));
    assert!(rendered.contains("roomdesk_http_request_duration_seconds"));
    assert!(rendered.contains("roomdesk_http_requests_errors_total{"));
    assert!(rendered.contains("roomdesk_price_quotes_total{room_type=\"NON_AC\"}"));
    assert!(!rendered.contains("path=\"/api/rooms/77\""));
    assert!(telemetry::metrics_handler().await.contains("roomdesk_http_requests_total"));
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_live_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_live_create_and_delete_room() {
    let client = Client::new();

    let response = client
        .post(format!("{}/rooms", BASE_URL))
        .json(&new_room("live-101", "NON_AC"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let room_id = body["id"].as_i64().expect("No room ID");

    let response = client
        .delete(format!("{}/rooms/{}", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}
