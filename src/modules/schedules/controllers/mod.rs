pub mod schedule_controller;

pub use schedule_controller::configure_schedule_routes;
