use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use log::warn;
use sea_orm::DatabaseConnection;
use crate::models::health::HealthResponse;

/// GET /ping - liveness, ne touche jamais la base
#[get("/ping")]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("pong")
}

/// GET /api/health - readiness, vérifie que le pool répond
#[get("/health")]
pub async fn health_check(db: web::Data<DatabaseConnection>) -> HttpResponse {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "ok".to_string(),
            database: "up".to_string(),
            time: Utc::now(),
        }),
        Err(e) => {
            warn!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded".to_string(),
                database: "down".to_string(),
                time: Utc::now(),
            })
        }
    }
}
