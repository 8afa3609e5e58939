use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Ways an application charge can be paid, each with a fixed card surcharge.
///
/// Decoding never fails: an unrecognised method reads as direct bank transfer,
/// so it can only drop the surcharge, never add one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum PaymentMethod {
    #[default]
    DirectBankTransfer,
    Paypal,
    Visa,
    Mastercard,
    AmericanExpress,
    Jcb,
    UnionPay,
    DinersClub,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 8] = [
        PaymentMethod::DirectBankTransfer,
        PaymentMethod::Paypal,
        PaymentMethod::Visa,
        PaymentMethod::Mastercard,
        PaymentMethod::AmericanExpress,
        PaymentMethod::Jcb,
        PaymentMethod::UnionPay,
        PaymentMethod::DinersClub,
    ];

    /// Wire name, as used in requests and responses
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::DirectBankTransfer => "direct_bank_transfer",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Visa => "visa",
            PaymentMethod::Mastercard => "mastercard",
            PaymentMethod::AmericanExpress => "american_express",
            PaymentMethod::Jcb => "jcb",
            PaymentMethod::UnionPay => "union_pay",
            PaymentMethod::DinersClub => "diners_club",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|method| method.code() == code)
    }

    /// Surcharge as a percentage of the subtotal (1.40 means 1.40%)
    pub fn surcharge_rate(&self) -> Decimal {
        match self {
            PaymentMethod::DirectBankTransfer => Decimal::ZERO,
            PaymentMethod::Paypal => Decimal::new(101, 2),
            PaymentMethod::Visa
            | PaymentMethod::Mastercard
            | PaymentMethod::AmericanExpress
            | PaymentMethod::Jcb
            | PaymentMethod::UnionPay => Decimal::new(140, 2),
            PaymentMethod::DinersClub => Decimal::new(170, 2),
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::DirectBankTransfer => "Direct bank transfer",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Visa => "Visa",
            PaymentMethod::Mastercard => "Mastercard",
            PaymentMethod::AmericanExpress => "American Express",
            PaymentMethod::Jcb => "JCB",
            PaymentMethod::UnionPay => "UnionPay",
            PaymentMethod::DinersClub => "Diners Club",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        Self::from_code(&value).unwrap_or_else(|| {
            warn!(payment_method = %value, "Unknown payment method, applying no surcharge");
            PaymentMethod::default()
        })
    }
}

/// One row of the surcharge table as served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodInfo {
    pub method: PaymentMethod,
    pub label: String,
    pub surcharge_rate: Decimal,
}

impl From<PaymentMethod> for PaymentMethodInfo {
    fn from(method: PaymentMethod) -> Self {
        Self {
            method,
            label: method.label().to_string(),
            surcharge_rate: method.surcharge_rate(),
        }
    }
}
