//! Visa fee calculation service library
//!
//! Computes itemised visa application costs from a fee schedule, an applicant
//! composition, a lodgement mode and a payment method. The calculation itself
//! lives in [`calculations::FeeCalculator`] and is free of I/O; the remaining
//! modules load schedules and expose the calculator over HTTP.

use actix_web::web;

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::applicants;
pub use modules::calculations;
pub use modules::payments;
pub use modules::schedules;

/// Mount every route the service exposes.
///
/// Probes live at the root; the fee API lives under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::controllers::configure)
        .service(
            web::scope("/api")
                .configure(schedules::controllers::configure_schedule_routes)
                .configure(payments::controllers::configure_payment_method_routes)
                .configure(calculations::controllers::configure_calculation_routes),
        );
}

/// Request extractor settings shared by the server and tests
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(middleware::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(middleware::path_error_handler));
}
