#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{http::header, test, web, App};
use chrono::Duration;
use serde_json::{json, Value};

use todoapp::auth::{AuthMiddleware, Identity, IdentityProvider, TokenResponse, TokenService};
use todoapp::models::Role;
use todoapp::routes;
use todoapp::store::InMemoryStore;
use todoapp::{AppError, AppState};

pub const JWT_SECRET: &str = "integration-test-secret";

/// bcrypt's minimum cost keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn token_service() -> TokenService {
    TokenService::new(JWT_SECRET, Duration::minutes(20))
}

pub fn memory_state() -> web::Data<AppState> {
    let store = Arc::new(InMemoryStore::new());
    web::Data::new(
        AppState::new(store.clone(), store, token_service()).with_bcrypt_cost(TEST_BCRYPT_COST),
    )
}

/// Identity provider that ignores the token and always answers with the same caller.
pub struct FixedIdentity(pub Identity);

impl IdentityProvider for FixedIdentity {
    fn identify(&self, _token: &str) -> Result<Identity, AppError> {
        Ok(self.0.clone())
    }
}

pub fn fixed_identity_state(id: i32, role: Role) -> web::Data<AppState> {
    let store = Arc::new(InMemoryStore::new());
    let identity = Identity {
        id,
        username: "mdshadan".into(),
        role,
    };
    web::Data::new(
        AppState::new(store.clone(), store, token_service())
            .with_bcrypt_cost(TEST_BCRYPT_COST)
            .with_identity(Arc::new(FixedIdentity(identity))),
    )
}

pub async fn init_app(
    state: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(state)
            .wrap(AuthMiddleware)
            .wrap(Logger::default())
            .configure(routes::config),
    )
    .await
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn todo_payload(title: &str, priority: i32) -> Value {
    json!({
        "title": title,
        "description": "Need to learn everyday!",
        "priority": priority,
        "complete": false
    })
}

/// Registers a user and returns the id assigned by the store.
pub async fn signup(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    username: &str,
    password: &str,
    role: Role,
) -> i32 {
    let req = test::TestRequest::post()
        .uri("/auth/")
        .set_json(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "first_name": "Test",
            "last_name": "User",
            "password": password,
            "role": role,
            "phone_number": "111-222-333"
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::CREATED,
        "signup of {} failed",
        username
    );
    let body: Value = test::read_body_json(resp).await;
    body["id"].as_i64().expect("signup response carries an id") as i32
}

/// Posts the login form and returns the raw response.
pub async fn login_response(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    username: &str,
    password: &str,
) -> ServiceResponse<impl MessageBody> {
    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_form(&[("username", username), ("password", password)])
        .to_request();
    test::call_service(app, req).await
}

/// Logs in and returns the access token.
pub async fn login(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    username: &str,
    password: &str,
) -> String {
    let resp = login_response(app, username, password).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK, "login of {} failed", username);
    let body: TokenResponse = test::read_body_json(resp).await;
    assert_eq!(body.token_type, "bearer");
    body.access_token
}

/// Signs up and logs in, returning `(user id, token)`.
pub async fn register_and_login(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    username: &str,
    role: Role,
) -> (i32, String) {
    let password = "Password123!";
    let id = signup(app, username, password, role).await;
    let token = login(app, username, password).await;
    (id, token)
}
