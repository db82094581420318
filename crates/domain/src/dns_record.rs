mod batch;
mod record;
mod record_type;
mod wire;

pub use batch::{format_records, parse_records};
pub use record::{Record, RecordData, DEFAULT_TTL};
pub use record_type::RecordType;
