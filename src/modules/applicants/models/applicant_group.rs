use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::PriorVisaSelection;

/// Applicant categories on a visa application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantCategory {
    /// Main applicant, always exactly one
    Primary,
    /// Additional adult applicants
    Secondary,
    /// Dependent child applicants
    Dependent,
}

impl ApplicantCategory {
    pub const ALL: [ApplicantCategory; 3] = [
        ApplicantCategory::Primary,
        ApplicantCategory::Secondary,
        ApplicantCategory::Dependent,
    ];

    /// Whether the headcount of this category can be changed
    pub fn is_adjustable(&self) -> bool {
        !matches!(self, ApplicantCategory::Primary)
    }
}

impl fmt::Display for ApplicantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicantCategory::Primary => write!(f, "primary"),
            ApplicantCategory::Secondary => write!(f, "secondary"),
            ApplicantCategory::Dependent => write!(f, "dependent"),
        }
    }
}

/// Headcount and location status of one applicant category.
///
/// Fields are private so the invariants hold no matter who mutates the group:
/// the primary count is always 1, and an offshore group always has no prior
/// visa selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplicantGroup {
    category: ApplicantCategory,
    count: u32,
    is_onshore: bool,
    prior_visa: PriorVisaSelection,
}

impl ApplicantGroup {
    pub fn new(
        category: ApplicantCategory,
        count: u32,
        is_onshore: bool,
        prior_visa: PriorVisaSelection,
    ) -> Self {
        let count = if category.is_adjustable() { count } else { 1 };
        let prior_visa = if is_onshore {
            prior_visa
        } else {
            PriorVisaSelection::None
        };

        Self {
            category,
            count,
            is_onshore,
            prior_visa,
        }
    }

    /// Empty offshore group; the primary group still counts one applicant
    pub fn empty(category: ApplicantCategory) -> Self {
        Self::new(category, 0, false, PriorVisaSelection::None)
    }

    pub fn category(&self) -> ApplicantCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_onshore(&self) -> bool {
        self.is_onshore
    }

    pub fn prior_visa(&self) -> PriorVisaSelection {
        self.prior_visa
    }

    /// Add one applicant. No-op for the primary category.
    pub fn increment(&mut self) {
        if self.category.is_adjustable() {
            self.count = self.count.saturating_add(1);
        }
    }

    /// Remove one applicant; stops at zero
    pub fn decrement(&mut self) {
        if self.category.is_adjustable() {
            self.count = self.count.saturating_sub(1);
        }
    }

    /// Set onshore status. Moving offshore clears the prior visa selection.
    pub fn set_onshore(&mut self, is_onshore: bool) {
        self.is_onshore = is_onshore;
        if !is_onshore {
            self.prior_visa = PriorVisaSelection::None;
        }
    }

    /// Select the prior visa held. Ignored while the group is offshore.
    pub fn select_prior_visa(&mut self, selection: PriorVisaSelection) {
        if !self.is_onshore && !selection.is_none() {
            debug!(
                category = %self.category,
                selection = %selection,
                "Prior visa selection ignored for offshore applicants"
            );
            return;
        }
        self.prior_visa = selection;
    }

    /// True when this group is liable for the subsequent application charge
    pub fn has_qualifying_prior_visa(&self) -> bool {
        self.is_onshore && !self.prior_visa.is_none()
    }
}
