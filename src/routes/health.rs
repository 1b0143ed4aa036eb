use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Health check endpoint. Does not require authentication.
#[get("/healthy")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "Healthy"
    }))
}
