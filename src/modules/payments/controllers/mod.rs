pub mod payment_method_controller;

pub use payment_method_controller::configure_payment_method_routes;
