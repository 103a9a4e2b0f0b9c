pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;

use rootwalk_application::ports::MessageCodec;
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError};

/// RFC 1035 wire codec backed by `hickory-proto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryMessageCodec;

impl HickoryMessageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for HickoryMessageCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(&query.domain, &query.record_type)
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        ResponseParser::parse(bytes)
    }
}
