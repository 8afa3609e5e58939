//! Payment method controller
//!
//! Serves the fixed surcharge table so clients can offer the same choices the
//! calculator accepts.

use actix_web::{web, HttpResponse};

use crate::modules::payments::models::{PaymentMethod, PaymentMethodInfo};

/// List payment methods with their surcharge rates
///
/// GET /payment-methods
pub async fn list_payment_methods() -> HttpResponse {
    let methods: Vec<PaymentMethodInfo> = PaymentMethod::ALL
        .into_iter()
        .map(PaymentMethodInfo::from)
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "payment_methods": methods,
    }))
}

/// Configure payment method routes
pub fn configure_payment_method_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/payment-methods", web::get().to(list_payment_methods));
}
