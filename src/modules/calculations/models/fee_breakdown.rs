// Itemised result of a fee calculation.
//
// Every amount is rounded to two decimal places when the breakdown is built;
// the calculator accumulates unrounded values and hands them over once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{format_money, round_money};

/// Subsequent application charges per applicant category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubsequentFees {
    pub primary: Decimal,
    pub secondary: Decimal,
    pub dependent: Decimal,
}

impl SubsequentFees {
    pub fn total(&self) -> Decimal {
        self.primary + self.secondary + self.dependent
    }
}

/// Itemised visa application cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub base: Decimal,
    pub non_internet: Decimal,
    pub subsequent: SubsequentFees,
    pub additional_adult: Decimal,
    pub additional_child: Decimal,
    pub subtotal: Decimal,
    /// Payment surcharge rate in percent
    pub surcharge_rate: Decimal,
    pub surcharge: Decimal,
    pub total: Decimal,
}

/// Unrounded amounts as accumulated by the calculator
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct UnroundedAmounts {
    pub base: Decimal,
    pub non_internet: Decimal,
    pub subsequent: SubsequentFees,
    pub additional_adult: Decimal,
    pub additional_child: Decimal,
    pub subtotal: Decimal,
    pub surcharge_rate: Decimal,
    pub surcharge: Decimal,
    pub total: Decimal,
}

impl FeeBreakdown {
    /// Breakdown with every amount zero
    pub fn zero() -> Self {
        Self::from_unrounded(UnroundedAmounts::default())
    }

    pub(crate) fn from_unrounded(amounts: UnroundedAmounts) -> Self {
        Self {
            base: round_money(amounts.base),
            non_internet: round_money(amounts.non_internet),
            subsequent: SubsequentFees {
                primary: round_money(amounts.subsequent.primary),
                secondary: round_money(amounts.subsequent.secondary),
                dependent: round_money(amounts.subsequent.dependent),
            },
            additional_adult: round_money(amounts.additional_adult),
            additional_child: round_money(amounts.additional_child),
            subtotal: round_money(amounts.subtotal),
            surcharge_rate: amounts.surcharge_rate,
            surcharge: round_money(amounts.surcharge),
            total: round_money(amounts.total),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total.is_zero() && self.subtotal.is_zero()
    }

    /// Non-zero components in display order
    pub fn line_items(&self) -> Vec<FeeLineItem> {
        [
            (FeeComponent::Base, self.base),
            (FeeComponent::NonInternet, self.non_internet),
            (FeeComponent::SubsequentPrimary, self.subsequent.primary),
            (FeeComponent::SubsequentSecondary, self.subsequent.secondary),
            (FeeComponent::SubsequentDependent, self.subsequent.dependent),
            (FeeComponent::AdditionalAdult, self.additional_adult),
            (FeeComponent::AdditionalChild, self.additional_child),
            (FeeComponent::Surcharge, self.surcharge),
        ]
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(component, amount)| FeeLineItem::new(component, amount))
        .collect()
    }
}

impl Default for FeeBreakdown {
    fn default() -> Self {
        Self::zero()
    }
}

/// Named component of a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeComponent {
    Base,
    NonInternet,
    SubsequentPrimary,
    SubsequentSecondary,
    SubsequentDependent,
    AdditionalAdult,
    AdditionalChild,
    Surcharge,
}

impl FeeComponent {
    pub fn label(&self) -> &'static str {
        match self {
            FeeComponent::Base => "Base application charge",
            FeeComponent::NonInternet => "Non-internet application charge",
            FeeComponent::SubsequentPrimary => "Subsequent temporary application charge (primary)",
            FeeComponent::SubsequentSecondary => {
                "Subsequent temporary application charge (secondary)"
            }
            FeeComponent::SubsequentDependent => {
                "Subsequent temporary application charge (dependents)"
            }
            FeeComponent::AdditionalAdult => "Additional applicant charge (18 and over)",
            FeeComponent::AdditionalChild => "Additional applicant charge (under 18)",
            FeeComponent::Surcharge => "Payment surcharge",
        }
    }
}

/// A labelled amount, ready for rendering or export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLineItem {
    pub component: FeeComponent,
    pub label: String,
    pub amount: Decimal,
    pub display_amount: String,
}

impl FeeLineItem {
    fn new(component: FeeComponent, amount: Decimal) -> Self {
        Self {
            component,
            label: component.label().to_string(),
            amount,
            display_amount: format_money(amount),
        }
    }
}

impl fmt::Display for FeeLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.display_amount)
    }
}
