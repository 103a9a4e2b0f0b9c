pub mod dns;

pub use dns::{CollectRecordsUseCase, DelegationResolver, Resolution};
