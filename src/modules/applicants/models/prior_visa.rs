use serde::{Deserialize, Serialize};
use std::fmt;

/// Temporary visas whose onshore holders attract the subsequent application
/// charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorVisa {
    TemporaryWorkShortStay,
    Training,
    TemporaryActivity,
    WorkingHoliday,
    TemporaryWorkSkilled,
    WorkAndHoliday,
    TemporarySkillShortage,
    TemporaryGraduate,
    SkilledWorkRegional,
    SkilledEmployerSponsoredRegional,
    Student,
    StudentGuardian,
    Visitor,
    ElectronicTravelAuthority,
    EVisitor,
}

impl PriorVisa {
    pub const ALL: [PriorVisa; 15] = [
        PriorVisa::TemporaryWorkShortStay,
        PriorVisa::Training,
        PriorVisa::TemporaryActivity,
        PriorVisa::WorkingHoliday,
        PriorVisa::TemporaryWorkSkilled,
        PriorVisa::WorkAndHoliday,
        PriorVisa::TemporarySkillShortage,
        PriorVisa::TemporaryGraduate,
        PriorVisa::SkilledWorkRegional,
        PriorVisa::SkilledEmployerSponsoredRegional,
        PriorVisa::Student,
        PriorVisa::StudentGuardian,
        PriorVisa::Visitor,
        PriorVisa::ElectronicTravelAuthority,
        PriorVisa::EVisitor,
    ];

    /// Subclass code of the visa
    pub fn code(&self) -> &'static str {
        match self {
            PriorVisa::TemporaryWorkShortStay => "400",
            PriorVisa::Training => "407",
            PriorVisa::TemporaryActivity => "408",
            PriorVisa::WorkingHoliday => "417",
            PriorVisa::TemporaryWorkSkilled => "457",
            PriorVisa::WorkAndHoliday => "462",
            PriorVisa::TemporarySkillShortage => "482",
            PriorVisa::TemporaryGraduate => "485",
            PriorVisa::SkilledWorkRegional => "491",
            PriorVisa::SkilledEmployerSponsoredRegional => "494",
            PriorVisa::Student => "500",
            PriorVisa::StudentGuardian => "590",
            PriorVisa::Visitor => "600",
            PriorVisa::ElectronicTravelAuthority => "601",
            PriorVisa::EVisitor => "651",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|visa| visa.code() == code)
    }
}

impl fmt::Display for PriorVisa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Prior visa chosen for an applicant category, or none.
///
/// Parsing never fails: codes outside the known list read as `None`, so an
/// unrecognised selection can only drop a charge, never add one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriorVisaSelection {
    #[default]
    None,
    Held(PriorVisa),
}

impl PriorVisaSelection {
    pub const NONE_CODE: &'static str = "none";

    pub fn parse(value: &str) -> Self {
        PriorVisa::from_code(value)
            .map(PriorVisaSelection::Held)
            .unwrap_or(PriorVisaSelection::None)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PriorVisaSelection::None)
    }

    pub fn code(&self) -> &'static str {
        match self {
            PriorVisaSelection::None => Self::NONE_CODE,
            PriorVisaSelection::Held(visa) => visa.code(),
        }
    }
}

impl From<String> for PriorVisaSelection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<PriorVisaSelection> for String {
    fn from(value: PriorVisaSelection) -> Self {
        value.code().to_string()
    }
}

impl From<PriorVisa> for PriorVisaSelection {
    fn from(value: PriorVisa) -> Self {
        PriorVisaSelection::Held(value)
    }
}

impl fmt::Display for PriorVisaSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
