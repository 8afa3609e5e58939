pub mod schedule_repository;

pub use schedule_repository::{
    parse_schedule_document, FileScheduleRepository, InMemoryScheduleRepository, ScheduleFormat,
    ScheduleRepository,
};
