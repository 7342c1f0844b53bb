pub mod duty_record_repo;

pub use duty_record_repo::DutyRecordRepo;
