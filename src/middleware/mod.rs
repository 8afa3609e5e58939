pub mod error_handler;
pub mod request_id;

pub use error_handler::{error_response, json_error_handler, log_error, path_error_handler};
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
