use std::sync::Arc;

use auth_boilerplate::app::build_router;
use auth_boilerplate::config::JwtProperties;
use auth_boilerplate::repos::InMemoryUserRepository;
use auth_boilerplate::services::factory::build_state;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn jwt(secret: &str) -> JwtProperties {
    JwtProperties {
        issuer: "boilerplate".into(),
        secret_key: secret.into(),
        expiration_minute: 60,
    }
}

fn app() -> Router {
    let users = Arc::new(InMemoryUserRepository::new());
    build_router(build_state(&jwt("integration-secret"), 4, users))
}

fn json_request(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn registration(email: &str, username: &str) -> Value {
    json!({
        "name": "Ann",
        "email": email,
        "username": username,
        "password": "pw12345",
    })
}

async fn register_and_login(app: &Router) -> String {
    let (status, _) = send_json(app, json_request("/register", registration("ann@x.com", "ann1"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(
        app,
        json_request("/login", json!({"username": "ann1", "password": "pw12345"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_login_then_hello() {
    let app = app();

    let (status, body) =
        send_json(&app, json_request("/register", registration("ann@x.com", "ann1"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "ann1 registered successfully!");

    let (status, body) = send_json(
        &app,
        json_request("/login", json!({"username": "ann1", "password": "pw12345"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let (status, bytes) = send(&app, get("/hello", Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"Hello Spring Boot Boilerplate");
}

#[tokio::test]
async fn hello_without_token_is_unauthorized() {
    let app = app();

    let (status, body) = send_json(&app, get("/hello", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "Full authentication is required to access this resource"
    );
    assert_eq!(body["status"], "UNAUTHORIZED");
    assert!(body["time"].is_string());
}

#[tokio::test]
async fn unknown_protected_path_is_unauthorized_before_routing() {
    let app = app();

    let (status, _) = send(&app, get("/does-not-exist", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = app();
    register_and_login(&app).await;

    let foreign = build_state(
        &jwt("some-other-secret"),
        4,
        Arc::new(InMemoryUserRepository::new()),
    );
    let foreign_app = build_router(foreign);
    let (status, _) = send(&foreign_app, json_request("/register", registration("ann@x.com", "ann1"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, body) = send_json(
        &foreign_app,
        json_request("/login", json!({"username": "ann1", "password": "pw12345"})),
    )
    .await;
    let foreign_token = body["token"].as_str().unwrap();

    let (status, _) = send(&app, get("/hello", Some(foreign_token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_email_is_reported_before_duplicate_username() {
    let app = app();
    register_and_login(&app).await;

    let (status, body) =
        send_json(&app, json_request("/register", registration("ann@x.com", "ann1"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "This email address is already being used!");
    assert_eq!(body["status"], "BAD_REQUEST");

    let (status, body) =
        send_json(&app, json_request("/register", registration("new@x.com", "ann1"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "This username is already being used!");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = app();
    register_and_login(&app).await;

    let (wrong_status, wrong_password) = send_json(
        &app,
        json_request("/login", json!({"username": "ann1", "password": "nope"})),
    )
    .await;
    let (unknown_status, unknown_user) = send_json(
        &app,
        json_request("/login", json!({"username": "ghost", "password": "pw12345"})),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password["message"], unknown_user["message"]);
    assert_eq!(wrong_password["message"], "Invalid username or password.");
}

#[tokio::test]
async fn invalid_registration_lists_every_violation() {
    let app = app();

    let (status, body) = send_json(
        &app,
        json_request(
            "/register",
            json!({"name": "", "email": "not-an-email", "username": "", "password": ""}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "BAD_REQUEST");
    assert_eq!(
        body["message"],
        json!([
            "Name cannot be empty!",
            "Please enter a valid email address!",
            "Username cannot be empty!",
            "Password cannot be empty!",
        ])
    );
}

#[tokio::test]
async fn missing_login_fields_are_validation_errors() {
    let app = app();

    let (status, body) = send_json(&app, json_request("/login", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!(["Username cannot be empty!", "Password cannot be empty!"])
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();

    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Request body could not be read.");
}

#[tokio::test]
async fn health_is_public() {
    let app = app();

    let (status, body) = send_json(&app, get("/actuator/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "UP"}));
}

#[tokio::test]
async fn messages_follow_accept_language() {
    let app = app();

    let req = Request::builder()
        .method("GET")
        .uri("/hello")
        .header(header::ACCEPT_LANGUAGE, "tr-TR,tr;q=0.9")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "Bu kaynağa erişmek için tam kimlik doğrulaması gereklidir"
    );
}

#[tokio::test]
async fn request_id_is_propagated() {
    let app = app();

    let req = Request::builder()
        .method("GET")
        .uri("/actuator/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}
