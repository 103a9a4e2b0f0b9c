mod message_codec;
mod nameserver_transport;
mod result_cache;

pub use message_codec::MessageCodec;
pub use nameserver_transport::NameserverTransport;
pub use result_cache::ResultCache;

// Re-export for convenience
pub use rootwalk_domain::{DnsQuery, DnsResponse};
