mod common;

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{rt, App, HttpServer};
use serde_json::{json, Value};

use common::{memory_state, todo_payload};
use todoapp::auth::AuthMiddleware;
use todoapp::routes;

/// End-to-end over a real socket: signup and login work, a missing token is a 401.
#[actix_rt::test]
async fn test_live_server_rejects_unauthenticated_create() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let state = memory_state();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(AuthMiddleware)
            .wrap(Cors::default().allow_any_origin().allow_any_method().allow_any_header().max_age(3600))
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .listen(listener)
    .expect("Failed to listen")
    .run();
    let handle = server.handle();
    let server_task = rt::spawn(server);

    let client = reqwest::Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    let resp = client
        .post(format!("{}/todo/", base))
        .json(&todo_payload("Unauthorized Todo", 3))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Not authenticated" }));

    let resp = client
        .post(format!("{}/auth/", base))
        .json(&json!({
            "username": "socket_user",
            "email": "socket_user@example.com",
            "first_name": "Socket",
            "last_name": "User",
            "password": "Password123!"
        }))
        .send()
        .await
        .expect("Failed to send signup");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let resp = client
        .post(format!("{}/auth/token", base))
        .form(&[("username", "socket_user"), ("password", "Password123!")])
        .send()
        .await
        .expect("Failed to send login");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let token: Value = resp.json().await.unwrap();
    let token = token["access_token"].as_str().unwrap().to_string();

    let resp = client
        .post(format!("{}/todo/", base))
        .bearer_auth(&token)
        .json(&todo_payload("Authorized Todo", 3))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    handle.stop(true).await;
    let _ = server_task.await;
}
