pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    FeeBreakdown, FeeCalculation, FeeCalculationInput, FeeComponent, FeeLineItem, LodgementMode,
    SubsequentFees,
};
pub use services::FeeCalculator;
