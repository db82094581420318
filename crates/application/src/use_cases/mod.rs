pub mod records;

pub use records::{GetRecordsUseCase, GlobRecordsUseCase, RemoveRecordUseCase, SetRecordsUseCase};
