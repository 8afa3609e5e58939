//! Schedule controller for HTTP endpoints
//!
//! Read access to the loaded fee schedule plus a reload trigger. The schedule
//! itself is never written through this API.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::schedules::services::ScheduleCatalog;

/// List every loaded schedule record
///
/// GET /schedules
pub async fn list_schedules(catalog: web::Data<ScheduleCatalog>) -> HttpResponse {
    let schedules = catalog.snapshot();

    HttpResponse::Ok().json(serde_json::json!({
        "loaded_at": schedules.loaded_at().to_rfc3339(),
        "count": schedules.len(),
        "schedules": schedules.records(),
    }))
}

/// Get the schedule record for one subclass
///
/// GET /schedules/{code}
pub async fn get_schedule(
    catalog: web::Data<ScheduleCatalog>,
    subclass_code: web::Path<String>,
) -> Result<HttpResponse> {
    let schedules = catalog.snapshot();

    match schedules.get(&subclass_code) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(AppError::not_found(format!(
            "fee schedule for subclass {}",
            subclass_code.as_str()
        ))),
    }
}

/// Re-read the schedule store and swap in the new snapshot
///
/// POST /schedules/reload
pub async fn reload_schedules(catalog: web::Data<ScheduleCatalog>) -> Result<HttpResponse> {
    let schedules = catalog.refresh().await?;

    info!(count = schedules.len(), "Fee schedule reloaded on request");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "loaded_at": schedules.loaded_at().to_rfc3339(),
        "count": schedules.len(),
    })))
}

/// Configure schedule routes
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/schedules")
            .route("", web::get().to(list_schedules))
            .route("/reload", web::post().to(reload_schedules))
            .route("/{code}", web::get().to(get_schedule)),
    );
}
