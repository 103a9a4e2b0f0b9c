mod collect_records;
mod resolve_delegation;

pub use collect_records::CollectRecordsUseCase;
pub use resolve_delegation::{DelegationResolver, Resolution};
