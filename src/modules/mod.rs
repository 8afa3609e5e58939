pub mod applicants;
pub mod calculations;
pub mod health;
pub mod payments;
pub mod schedules;
