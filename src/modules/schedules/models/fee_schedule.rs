// Fee schedule records: the boundary shape read from the schedule store and the
// canonical record the fee engine consumes.
//
// Stored documents are loosely shaped. Field names differ between exports and
// charges may be numbers or display strings such as "1,420". Everything is
// mapped into `FeeScheduleRecord`, whose fees are always whole, non-negative
// currency units.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::modules::schedules::services::try_parse_charge;

/// Canonical fee schedule row for one visa subclass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeScheduleRecord {
    /// Canonical subclass identifier, e.g. "500"
    pub subclass_code: String,

    /// Display name of the visa
    pub visa_name: String,

    /// Base application charge for the primary applicant
    pub base_fee: u64,

    /// Charge per onshore applicant holding a qualifying prior visa
    pub subsequent_fee: u64,

    /// Surcharge for paper lodgement
    pub non_internet_fee: u64,

    /// Charge per secondary (adult) applicant
    pub additional_adult_fee: u64,

    /// Charge per dependent (child) applicant
    pub additional_child_fee: u64,
}

/// A charge value as it appears in a stored document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCharge {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Booleans, lists, maps: kept so the row still loads, read as no charge
    Other(Value),
}

impl RawCharge {
    /// Whole-currency amount, or `None` when the value cannot be read as one
    fn amount(&self) -> Option<u64> {
        match self {
            RawCharge::Integer(value) => u64::try_from(*value).ok(),
            RawCharge::Float(value) if value.is_finite() && *value >= 0.0 => {
                Some(value.trunc() as u64)
            }
            RawCharge::Float(_) => None,
            RawCharge::Text(text) => try_parse_charge(text),
            RawCharge::Other(_) => None,
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, RawCharge::Text(text) if text.trim().is_empty())
    }
}

/// Subclass identifier as stored; some exports write it as a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCode {
    Number(u64),
    Text(String),
    Other(Value),
}

impl RawCode {
    fn as_code(&self) -> Option<String> {
        match self {
            RawCode::Number(value) => Some(value.to_string()),
            RawCode::Text(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            RawCode::Text(_) | RawCode::Other(_) => None,
        }
    }
}

// Accepted spellings per field, canonical name first. Exports disagree on
// naming and some carry more than one spelling in the same row.
const SUBCLASS_CODE_KEYS: &[&str] = &["subclass_code", "subclassCode", "subclass", "code"];
const VISA_NAME_KEYS: &[&str] = &["visa_name", "visaName", "name", "visa"];
const BASE_FEE_KEYS: &[&str] = &[
    "base_fee",
    "baseFee",
    "base_charge",
    "base_application_charge",
    "baseApplicationCharge",
];
const SUBSEQUENT_FEE_KEYS: &[&str] = &[
    "subsequent_fee",
    "subsequentFee",
    "subsequent_charge",
    "subsequent_temporary_application_charge",
];
const NON_INTERNET_FEE_KEYS: &[&str] = &[
    "non_internet_fee",
    "nonInternetFee",
    "non_internet_charge",
    "nonInternetCharge",
];
const ADDITIONAL_ADULT_FEE_KEYS: &[&str] = &[
    "additional_adult_fee",
    "additionalAdultFee",
    "additional_adult_charge",
    "additional_applicant_18_plus",
];
const ADDITIONAL_CHILD_FEE_KEYS: &[&str] = &[
    "additional_child_fee",
    "additionalChildFee",
    "additional_child_charge",
    "additional_applicant_under_18",
];

/// Fee schedule row exactly as read from the store.
///
/// Decoding never rejects a row: any map is accepted, unknown keys are
/// ignored and a field given under several spellings takes the first non-null
/// one in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct RawFeeScheduleRecord {
    pub subclass_code: Option<RawCode>,
    pub visa_name: String,
    pub base_fee: Option<RawCharge>,
    pub subsequent_fee: Option<RawCharge>,
    pub non_internet_fee: Option<RawCharge>,
    pub additional_adult_fee: Option<RawCharge>,
    pub additional_child_fee: Option<RawCharge>,
}

impl From<Map<String, Value>> for RawFeeScheduleRecord {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut take = |keys: &[&str]| -> Option<Value> {
            keys.iter()
                .filter_map(|key| fields.remove(*key))
                .find(|value| !value.is_null())
        };

        let subclass_code = take(SUBCLASS_CODE_KEYS).and_then(|v| serde_json::from_value(v).ok());
        let visa_name = match take(VISA_NAME_KEYS) {
            Some(Value::String(name)) => name,
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        };
        let mut charge = |keys: &[&str]| -> Option<RawCharge> {
            take(keys).and_then(|v| serde_json::from_value(v).ok())
        };

        Self {
            subclass_code,
            visa_name,
            base_fee: charge(BASE_FEE_KEYS),
            subsequent_fee: charge(SUBSEQUENT_FEE_KEYS),
            non_internet_fee: charge(NON_INTERNET_FEE_KEYS),
            additional_adult_fee: charge(ADDITIONAL_ADULT_FEE_KEYS),
            additional_child_fee: charge(ADDITIONAL_CHILD_FEE_KEYS),
        }
    }
}

impl RawFeeScheduleRecord {
    /// Map into a canonical record.
    ///
    /// Never fails: unreadable charges become 0 and are reported as
    /// data-quality warnings. Returns `None` only when the row carries neither
    /// a subclass code nor a visa name to derive one from.
    pub fn into_record(self) -> Option<FeeScheduleRecord> {
        let visa_name = self.visa_name.trim().to_string();
        let subclass_code = self
            .subclass_code
            .as_ref()
            .and_then(RawCode::as_code)
            .or_else(|| subclass_code_from_name(&visa_name))?;

        let charge = |field: &'static str, raw: &Option<RawCharge>| -> u64 {
            charge_or_zero(&subclass_code, field, raw.as_ref())
        };

        let record = FeeScheduleRecord {
            base_fee: charge("base_fee", &self.base_fee),
            subsequent_fee: charge("subsequent_fee", &self.subsequent_fee),
            non_internet_fee: charge("non_internet_fee", &self.non_internet_fee),
            additional_adult_fee: charge("additional_adult_fee", &self.additional_adult_fee),
            additional_child_fee: charge("additional_child_fee", &self.additional_child_fee),
            visa_name,
            subclass_code,
        };

        Some(record)
    }
}

fn charge_or_zero(subclass_code: &str, field: &str, raw: Option<&RawCharge>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    if raw.is_blank() {
        return 0;
    }

    match raw.amount() {
        Some(amount) => amount,
        None => {
            warn!(
                subclass_code = %subclass_code,
                field = field,
                value = ?raw,
                "Unparsable fee field in schedule record, defaulting to 0"
            );
            0
        }
    }
}

/// Derive a subclass code from a free-text visa name.
///
/// Takes the first run of ASCII digits ("Student visa (subclass 500)" gives
/// "500"). A name without digits is used as the code itself. Blank names give
/// `None`.
pub fn subclass_code_from_name(visa_name: &str) -> Option<String> {
    let name = visa_name.trim();
    if name.is_empty() {
        return None;
    }

    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        Some(name.to_string())
    } else {
        Some(digits)
    }
}
