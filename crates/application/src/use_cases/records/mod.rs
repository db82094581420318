mod get_records;
mod glob_records;
mod remove_record;
mod set_records;

pub use get_records::GetRecordsUseCase;
pub use glob_records::GlobRecordsUseCase;
pub use remove_record::RemoveRecordUseCase;
pub use set_records::SetRecordsUseCase;
