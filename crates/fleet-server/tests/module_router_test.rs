//! HTTP tests against the router built from the in-memory Shaku module.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use fleet_config::{SecurityConfig, ServerConfig};
use fleet_rest::create_router_from_module;
use fleet_server::di::build_in_memory_module;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let security = SecurityConfig {
        username: "admin".to_string(),
        password: Some("secret".to_string()),
        password_hash: None,
        realm: "fleet".to_string(),
    };
    let module = build_in_memory_module(&security).unwrap();
    create_router_from_module(module.as_ref(), &ServerConfig::default())
}

fn request(method: Method, uri: &str, body: Option<Value>, password: Option<&str>) -> Request<Body> {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |json| Body::from(json.to_string())))
        .unwrap();
    if let Some(password) = password {
        request
            .headers_mut()
            .typed_insert(Authorization::basic("admin", password));
    }
    request
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_create_then_fetch_through_module() {
    let app = app();

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/cars",
            Some(json!({"make": "bmw", "model": "X5", "mileage": 10000})),
            Some("secret"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], "Successfully created car entity");
    let id = body["car"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        request(Method::GET, &format!("/cars/{}", id), None, Some("secret")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Successfully fetched car from repo");
    assert_eq!(body["car"]["id"], id.as_str());
    assert_eq!(body["car"]["make"], "bmw");
    assert_eq!(body["car"]["mileage"], 10000);
}

#[tokio::test]
async fn test_module_router_rejects_bad_credentials() {
    let app = app();

    let (status, _) = send(&app, request(Method::GET, "/cars", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, request(Method::GET, "/cars", None, Some("wrong"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
