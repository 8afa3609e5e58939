pub mod calculation_input;
pub mod fee_breakdown;
pub mod lodgement_mode;

pub use calculation_input::{FeeCalculation, FeeCalculationInput};
pub(crate) use fee_breakdown::UnroundedAmounts;
pub use fee_breakdown::{FeeBreakdown, FeeComponent, FeeLineItem, SubsequentFees};
pub use lodgement_mode::LodgementMode;
