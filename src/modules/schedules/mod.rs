pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{FeeScheduleRecord, RawFeeScheduleRecord, ScheduleSet};
pub use repositories::{FileScheduleRepository, InMemoryScheduleRepository, ScheduleRepository};
pub use services::{parse_charge, ScheduleCatalog};
