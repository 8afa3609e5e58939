pub mod applicant_group;
pub mod composition;
pub mod prior_visa;

pub use applicant_group::{ApplicantCategory, ApplicantGroup};
pub use composition::{ApplicantComposition, ApplicantCompositionInput, ApplicantGroupInput};
pub use prior_visa::{PriorVisa, PriorVisaSelection};
