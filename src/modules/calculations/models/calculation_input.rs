use serde::{Deserialize, Serialize};

use super::{FeeBreakdown, FeeLineItem, LodgementMode};
use crate::modules::applicants::models::ApplicantComposition;
use crate::modules::calculations::services::FeeCalculator;
use crate::modules::payments::models::PaymentMethod;
use crate::modules::schedules::models::ScheduleSet;

/// Everything a fee calculation depends on besides the schedule itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCalculationInput {
    #[serde(alias = "subclass", alias = "subclassCode")]
    pub subclass_code: String,

    #[serde(default)]
    pub composition: ApplicantComposition,

    #[serde(default, alias = "lodgement_mode", alias = "lodgementMode")]
    pub lodgement: LodgementMode,

    #[serde(default, alias = "payment", alias = "paymentMethod")]
    pub payment_method: PaymentMethod,
}

impl FeeCalculationInput {
    pub fn new(subclass_code: impl Into<String>) -> Self {
        Self {
            subclass_code: subclass_code.into(),
            composition: ApplicantComposition::default(),
            lodgement: LodgementMode::default(),
            payment_method: PaymentMethod::default(),
        }
    }

    pub fn with_composition(mut self, composition: ApplicantComposition) -> Self {
        self.composition = composition;
        self
    }

    pub fn with_lodgement(mut self, lodgement: LodgementMode) -> Self {
        self.lodgement = lodgement;
        self
    }

    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Resolve the subclass against a schedule snapshot and compute the fees
    pub fn calculate(&self, schedules: &ScheduleSet) -> FeeCalculation {
        let record = schedules.get(&self.subclass_code);
        let breakdown = FeeCalculator::compute_breakdown(
            record,
            &self.composition,
            self.lodgement,
            self.payment_method,
        );

        FeeCalculation {
            subclass_code: self.subclass_code.trim().to_string(),
            visa_name: record.map(|r| r.visa_name.clone()),
            record_found: record.is_some(),
            line_items: breakdown.line_items(),
            breakdown,
        }
    }
}

/// Result of resolving and computing one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCalculation {
    pub subclass_code: String,
    pub visa_name: Option<String>,
    pub record_found: bool,
    pub breakdown: FeeBreakdown,
    pub line_items: Vec<FeeLineItem>,
}
