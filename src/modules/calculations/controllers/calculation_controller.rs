//! Fee calculation controller
//!
//! Adapts JSON requests into a `FeeCalculationInput` and runs it against the
//! current schedule snapshot. An unknown subclass is not an error: it produces
//! an all-zero breakdown with `record_found: false`.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::calculations::models::FeeCalculationInput;
use crate::modules::schedules::services::ScheduleCatalog;

/// Compute a fee breakdown
///
/// POST /calculations
pub async fn calculate_fees(
    catalog: web::Data<ScheduleCatalog>,
    input: web::Json<FeeCalculationInput>,
) -> Result<HttpResponse> {
    let input = input.into_inner();
    if input.subclass_code.trim().is_empty() {
        return Err(AppError::validation("subclass_code must not be empty"));
    }

    let schedules = catalog.snapshot();
    let calculation = input.calculate(&schedules);

    info!(
        subclass_code = %calculation.subclass_code,
        record_found = calculation.record_found,
        total = %calculation.breakdown.total,
        "Fee calculation served"
    );

    Ok(HttpResponse::Ok().json(calculation))
}

/// Configure calculation routes
pub fn configure_calculation_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calculations", web::post().to(calculate_fees));
}
