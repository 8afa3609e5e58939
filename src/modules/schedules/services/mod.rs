pub mod charge_parser;
pub mod schedule_catalog;

pub use charge_parser::{parse_charge, try_parse_charge};
pub use schedule_catalog::ScheduleCatalog;
