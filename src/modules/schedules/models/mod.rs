pub mod fee_schedule;
pub mod schedule_set;

pub use fee_schedule::{
    subclass_code_from_name, FeeScheduleRecord, RawCharge, RawCode, RawFeeScheduleRecord,
};
pub use schedule_set::ScheduleSet;
