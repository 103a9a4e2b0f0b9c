//! rootwalk domain layer
pub mod collected_result;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod domain_name;
pub mod errors;
pub mod root_hints;

pub use collected_result::CollectedResult;
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordType, ResolvedRecord, ResourceRecord};
pub use dns_response::DnsResponse;
pub use errors::DomainError;
pub use root_hints::ROOT_SERVERS;
