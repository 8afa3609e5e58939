use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};

use crate::core::AppError;

/// Helper function to create standardized error responses
pub fn error_response(status_code: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "code": status_code.as_u16(),
            "message": message.into(),
        }
    }))
}

/// Render JSON body failures (malformed JSON, negative counts) in the same
/// envelope as `AppError`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let app_error = AppError::validation(format!("Invalid request body: {}", err));
    log_error(&app_error, req);

    let response = error_response(StatusCode::BAD_REQUEST, app_error.to_string());
    InternalError::from_response(err, response).into()
}

/// Render path extraction failures in the standard envelope
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let app_error = AppError::validation(format!("Invalid path parameter: {}", err));
    log_error(&app_error, req);

    let response = error_response(StatusCode::BAD_REQUEST, app_error.to_string());
    InternalError::from_response(err, response).into()
}

/// Log a request-level error for monitoring
pub fn log_error(err: &AppError, req: &HttpRequest) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Request rejected"
    );
}
