pub mod controllers;
pub mod models;

pub use models::{PaymentMethod, PaymentMethodInfo};
