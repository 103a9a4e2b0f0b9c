pub mod cache;
pub mod codec;
pub mod transport;

pub use cache::{InMemoryResultCache, NoopResultCache};
pub use codec::{HickoryMessageCodec, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use transport::UdpTransport;
