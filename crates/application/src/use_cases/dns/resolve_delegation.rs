use crate::ports::{MessageCodec, NameserverTransport};
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_PORT: u16 = 53;
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);
const DEFAULT_MAX_HOPS: usize = 30;

/// Outcome of one delegation-following resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A reply whose answer section holds at least one record of the
    /// requested type.
    Answer(DnsResponse),

    /// Every candidate server was exhausted, or the hop limit was reached.
    NotFound,
}

/// Where a single server's reply sends the walk next.
enum Step {
    Answer(DnsResponse),
    Alias(String),
    Referral(Vec<Ipv4Addr>),
    Exhausted,
}

enum AnswerScan {
    Match,
    Alias(String),
    Unusable,
}

/// Walks the DNS hierarchy from a candidate server set down to an answer.
///
/// Servers are tried strictly in order, one outstanding query at a time. A
/// referral replaces the server set with the glue addresses; a CNAME restarts
/// the walk from the root set with the alias target. Either step abandons the
/// remaining servers of the current set.
pub struct DelegationResolver {
    codec: Arc<dyn MessageCodec>,
    transport: Arc<dyn NameserverTransport>,
    root_servers: Arc<[Ipv4Addr]>,
    port: u16,
    query_timeout: Duration,
    max_hops: usize,
}

impl DelegationResolver {
    pub fn new(
        codec: Arc<dyn MessageCodec>,
        transport: Arc<dyn NameserverTransport>,
        root_servers: Vec<Ipv4Addr>,
    ) -> Self {
        Self {
            codec,
            transport,
            root_servers: Arc::from(root_servers),
            port: DEFAULT_PORT,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub async fn resolve_from_root(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        self.resolve(query, &self.root_servers).await
    }

    /// Resolves `query` starting at `servers`.
    ///
    /// Only a caller query that cannot be encoded is an error. An alias
    /// target that cannot be encoded ends the walk as `NotFound`. Timeouts
    /// and undecodable replies move on to the next server.
    pub async fn resolve(
        &self,
        query: &DnsQuery,
        servers: &[Ipv4Addr],
    ) -> Result<Resolution, DomainError> {
        let mut query_bytes = self.codec.encode_query(query)?;
        let mut query = query.clone();
        let mut servers = servers.to_vec();
        let mut hops = 0usize;

        loop {
            if servers.is_empty() {
                debug!(domain = %query.domain, record_type = %query.record_type, "No candidate servers left");
                return Ok(Resolution::NotFound);
            }

            match self.try_servers(&query, &query_bytes, &servers).await {
                Step::Answer(response) => {
                    debug!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        answers = response.answers.len(),
                        hops = hops,
                        "Answer found"
                    );
                    return Ok(Resolution::Answer(response));
                }
                Step::Exhausted => {
                    debug!(
                        domain = %query.domain,
                        record_type = %query.record_type,
                        servers = servers.len(),
                        "Server set exhausted"
                    );
                    return Ok(Resolution::NotFound);
                }
                Step::Alias(target) => {
                    debug!(from = %query.domain, to = %target, "Following alias from the root");
                    query = query.with_domain(target);
                    query_bytes = match self.codec.encode_query(&query) {
                        Ok(bytes) => bytes,
                        Err(e) => {
                            warn!(
                                domain = %query.domain,
                                record_type = %query.record_type,
                                error = %e,
                                "Alias target cannot be encoded, giving up"
                            );
                            return Ok(Resolution::NotFound);
                        }
                    };
                    servers = self.root_servers.to_vec();
                }
                Step::Referral(glue) => {
                    debug!(domain = %query.domain, glue = ?glue, "Following referral");
                    servers = glue;
                }
            }

            hops += 1;
            if hops > self.max_hops {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    max_hops = self.max_hops,
                    "Hop limit reached, giving up"
                );
                return Ok(Resolution::NotFound);
            }
        }
    }

    async fn try_servers(
        &self,
        query: &DnsQuery,
        query_bytes: &[u8],
        servers: &[Ipv4Addr],
    ) -> Step {
        for (position, server) in servers.iter().enumerate() {
            let server_addr = SocketAddr::from((*server, self.port));

            let reply = match self
                .transport
                .send(query_bytes, server_addr, self.query_timeout)
                .await
            {
                Ok(bytes) => bytes,
                Err(e) => {
                    debug!(server = %server_addr, error = %e, position = position, "No usable reply, trying next server");
                    continue;
                }
            };

            let response = match self.codec.decode_response(&reply) {
                Ok(response) => response,
                Err(e) => {
                    debug!(server = %server_addr, error = %e, position = position, "Undecodable reply, trying next server");
                    continue;
                }
            };

            if !response.answers.is_empty() {
                match scan_answers(&response.answers, query.record_type) {
                    AnswerScan::Match => return Step::Answer(response),
                    AnswerScan::Alias(target) => return Step::Alias(target),
                    AnswerScan::Unusable => {
                        debug!(server = %server_addr, "Answer holds no usable record");
                    }
                }
            } else if !response.additional.is_empty() {
                let glue = response.glue_addresses();
                if !glue.is_empty() {
                    return Step::Referral(glue);
                }
                debug!(server = %server_addr, "Referral carries no IPv4 glue");
            }
        }

        Step::Exhausted
    }
}

/// First record of the wanted type wins; otherwise the first CNAME is
/// chased. Records of any other type are skipped.
fn scan_answers(answers: &[ResourceRecord], wanted: RecordType) -> AnswerScan {
    for record in answers {
        if record.is_type(wanted) {
            return AnswerScan::Match;
        }
        if let Some(target) = record.cname_target() {
            return AnswerScan::Alias(target.to_string());
        }
    }
    AnswerScan::Unusable
}
