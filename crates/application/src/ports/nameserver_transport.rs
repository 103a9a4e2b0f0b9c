use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Sends one encoded query to one nameserver and waits for its reply.
#[async_trait]
pub trait NameserverTransport: Send + Sync {
    /// Returns `DomainError::TransportTimeout` when no reply arrives within
    /// `timeout`.
    async fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;
}
