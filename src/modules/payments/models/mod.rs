pub mod payment_method;

pub use payment_method::{PaymentMethod, PaymentMethodInfo};
