use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::schedules::services::ScheduleCatalog;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub fee_schedule: String,
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub fee_schedule: bool,
    pub schedule_records: usize,
    pub schedule_loaded_at: String,
    pub application: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
/// Does not check the fee schedule
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            fee_schedule: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Returns 200 once a fee schedule with at least one record is loaded
pub async fn readiness_check(catalog: web::Data<ScheduleCatalog>) -> impl Responder {
    let schedules = catalog.snapshot();
    let ready = !schedules.is_empty();

    if !ready {
        tracing::warn!("Readiness check failed: fee schedule is empty");
    }

    let response = ReadinessResponse {
        ready,
        checks: ReadinessChecks {
            fee_schedule: ready,
            schedule_records: schedules.len(),
            schedule_loaded_at: schedules.loaded_at().to_rfc3339(),
            application: true,
        },
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
