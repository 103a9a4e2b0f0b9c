#![allow(dead_code)]
use async_trait::async_trait;
use rootwalk_application::ports::{MessageCodec, NameserverTransport};
use rootwalk_domain::domain_name::absolute_name;
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError, RecordData, RecordType, ResourceRecord};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Codec that speaks JSON instead of DNS wire format, so the scripted
/// hierarchy can read queries back without a real parser. Like the wire
/// codec it refuses names it cannot put in a question; here that is any
/// name containing whitespace.
pub struct JsonCodec;

impl MessageCodec for JsonCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        if query.domain.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}': cannot encode",
                query.domain
            )));
        }
        serde_json::to_vec(query).map_err(|e| DomainError::InvalidDomainName(e.to_string()))
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))
    }
}

#[derive(Clone)]
enum Reply {
    Response(DnsResponse),
    Garbage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentQuery {
    pub server: SocketAddr,
    pub domain: String,
    pub record_type: RecordType,
}

/// Scripted set of nameservers. Any (server, name, type) without a script
/// behaves like a silent server and times out.
#[derive(Clone, Default)]
pub struct MockHierarchy {
    replies: Arc<Mutex<HashMap<(Ipv4Addr, String, RecordType), Reply>>>,
    sent: Arc<Mutex<Vec<SentQuery>>>,
}

impl MockHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: &str, domain: &str, record_type: RecordType, response: DnsResponse) {
        self.replies.lock().unwrap().insert(
            (server.parse().unwrap(), absolute_name(domain), record_type),
            Reply::Response(response),
        );
    }

    pub fn respond_garbage(&self, server: &str, domain: &str, record_type: RecordType) {
        self.replies.lock().unwrap().insert(
            (server.parse().unwrap(), absolute_name(domain), record_type),
            Reply::Garbage,
        );
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn round_trips(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn round_trips_for(&self, record_type: RecordType) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.record_type == record_type)
            .count()
    }

    pub fn servers_asked(&self) -> Vec<Ipv4Addr> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|q| match q.server {
                SocketAddr::V4(v4) => *v4.ip(),
                SocketAddr::V6(_) => panic!("IPv6 server in mock hierarchy"),
            })
            .collect()
    }
}

#[async_trait]
impl NameserverTransport for MockHierarchy {
    async fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let query: DnsQuery = serde_json::from_slice(message_bytes)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        self.sent.lock().unwrap().push(SentQuery {
            server,
            domain: query.domain.to_string(),
            record_type: query.record_type,
        });

        let ip = match server {
            SocketAddr::V4(v4) => *v4.ip(),
            SocketAddr::V6(_) => {
                return Err(DomainError::TransportTimeout {
                    server: server.to_string(),
                })
            }
        };

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&(ip, absolute_name(&query.domain), query.record_type))
            .cloned();

        match reply {
            Some(Reply::Response(response)) => Ok(serde_json::to_vec(&response).unwrap()),
            Some(Reply::Garbage) => Ok(vec![0xde, 0xad, 0xbe, 0xef]),
            None => Err(DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        }
    }
}

pub fn a(name: &str, address: &str) -> ResourceRecord {
    ResourceRecord::new(absolute_name(name), 300, RecordData::A(address.parse().unwrap()))
}

pub fn aaaa(name: &str, address: &str) -> ResourceRecord {
    ResourceRecord::new(absolute_name(name), 300, RecordData::AAAA(address.parse().unwrap()))
}

pub fn cname(name: &str, target: &str) -> ResourceRecord {
    ResourceRecord::new(absolute_name(name), 300, RecordData::CNAME(absolute_name(target)))
}

pub fn ns(zone: &str, host: &str) -> ResourceRecord {
    ResourceRecord::new(absolute_name(zone), 172_800, RecordData::NS(absolute_name(host)))
}

pub fn mx(name: &str, preference: u16, exchange: &str) -> ResourceRecord {
    ResourceRecord::new(
        absolute_name(name),
        300,
        RecordData::MX {
            preference,
            exchange: absolute_name(exchange),
        },
    )
}

/// Referral to `zone` served by `host` at `glue`.
pub fn referral(zone: &str, host: &str, glue: &[&str]) -> DnsResponse {
    DnsResponse::referral(
        vec![ns(zone, host)],
        glue.iter().map(|ip| a(host, ip)).collect(),
    )
}
