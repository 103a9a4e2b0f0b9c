mod record;
mod record_type;
mod resolved;

pub use record::{RecordData, ResourceRecord};
pub use record_type::RecordType;
pub use resolved::ResolvedRecord;
