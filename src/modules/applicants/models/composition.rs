use serde::{Deserialize, Serialize};

use super::{ApplicantCategory, ApplicantGroup, PriorVisaSelection};

/// The three applicant groups of one application.
///
/// All changes go through the category-addressed operations below, which
/// delegate to [`ApplicantGroup`] and so keep its invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ApplicantCompositionInput")]
pub struct ApplicantComposition {
    primary: ApplicantGroup,
    secondary: ApplicantGroup,
    dependent: ApplicantGroup,
}

impl ApplicantComposition {
    /// A lone offshore primary applicant
    pub fn new() -> Self {
        Self {
            primary: ApplicantGroup::empty(ApplicantCategory::Primary),
            secondary: ApplicantGroup::empty(ApplicantCategory::Secondary),
            dependent: ApplicantGroup::empty(ApplicantCategory::Dependent),
        }
    }

    pub fn primary(&self) -> &ApplicantGroup {
        &self.primary
    }

    pub fn secondary(&self) -> &ApplicantGroup {
        &self.secondary
    }

    pub fn dependent(&self) -> &ApplicantGroup {
        &self.dependent
    }

    pub fn group(&self, category: ApplicantCategory) -> &ApplicantGroup {
        match category {
            ApplicantCategory::Primary => &self.primary,
            ApplicantCategory::Secondary => &self.secondary,
            ApplicantCategory::Dependent => &self.dependent,
        }
    }

    fn group_mut(&mut self, category: ApplicantCategory) -> &mut ApplicantGroup {
        match category {
            ApplicantCategory::Primary => &mut self.primary,
            ApplicantCategory::Secondary => &mut self.secondary,
            ApplicantCategory::Dependent => &mut self.dependent,
        }
    }

    pub fn increment(&mut self, category: ApplicantCategory) {
        self.group_mut(category).increment();
    }

    pub fn decrement(&mut self, category: ApplicantCategory) {
        self.group_mut(category).decrement();
    }

    pub fn set_onshore(&mut self, category: ApplicantCategory, is_onshore: bool) {
        self.group_mut(category).set_onshore(is_onshore);
    }

    pub fn select_prior_visa(&mut self, category: ApplicantCategory, selection: PriorVisaSelection) {
        self.group_mut(category).select_prior_visa(selection);
    }

    /// Builder-style variant of [`Self::set_onshore`] followed by
    /// [`Self::select_prior_visa`]
    pub fn with_onshore(
        mut self,
        category: ApplicantCategory,
        selection: impl Into<PriorVisaSelection>,
    ) -> Self {
        self.set_onshore(category, true);
        self.select_prior_visa(category, selection.into());
        self
    }

    /// Builder-style headcount for an adjustable category
    pub fn with_count(mut self, category: ApplicantCategory, count: u32) -> Self {
        let group = *self.group(category);
        *self.group_mut(category) =
            ApplicantGroup::new(category, count, group.is_onshore(), group.prior_visa());
        self
    }

    /// Total number of applicants including the primary
    pub fn total_applicants(&self) -> u64 {
        ApplicantCategory::ALL
            .iter()
            .map(|category| u64::from(self.group(*category).count()))
            .sum()
    }
}

impl Default for ApplicantComposition {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of one group. Counts are unsigned, so negative headcounts are
/// rejected when the request is decoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicantGroupInput {
    pub count: u32,
    #[serde(alias = "isOnshore")]
    pub is_onshore: bool,
    #[serde(alias = "priorVisa", alias = "prior_visa_selection")]
    pub prior_visa: PriorVisaSelection,
}

/// Wire shape of a composition
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicantCompositionInput {
    pub primary: ApplicantGroupInput,
    pub secondary: ApplicantGroupInput,
    pub dependent: ApplicantGroupInput,
}

impl From<ApplicantCompositionInput> for ApplicantComposition {
    fn from(input: ApplicantCompositionInput) -> Self {
        let group = |category, input: ApplicantGroupInput| {
            ApplicantGroup::new(category, input.count, input.is_onshore, input.prior_visa)
        };

        Self {
            primary: group(ApplicantCategory::Primary, input.primary),
            secondary: group(ApplicantCategory::Secondary, input.secondary),
            dependent: group(ApplicantCategory::Dependent, input.dependent),
        }
    }
}
