pub mod models;

pub use models::{
    ApplicantCategory, ApplicantComposition, ApplicantGroup, PriorVisa, PriorVisaSelection,
};
