use rootwalk_domain::{DnsQuery, DnsResponse, DomainError};

/// Wire-format encoding of queries and decoding of replies.
pub trait MessageCodec: Send + Sync {
    fn encode_query(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError>;

    /// Fails with `DomainError::InvalidDnsResponse` on undecodable input.
    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DomainError>;
}
