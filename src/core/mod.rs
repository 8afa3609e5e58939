pub mod error;
pub mod money;

pub use error::{AppError, Result};
pub use money::{format_money, round_money, MONEY_SCALE};
