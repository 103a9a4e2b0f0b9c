use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use rootwalk_domain::{DnsResponse, DomainError, RecordData, ResourceRecord};
use tracing::debug;

/// Decodes wire-format replies into the three record sections the resolver
/// walks. Header flags and the response code are not consulted.
///
/// Names are kept in ASCII presentation form: punycode stays punycode and
/// unusual bytes are escaped, so a name can be sent back out unchanged.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<ResourceRecord> = message.answers().iter().map(convert_record).collect();
        let authority: Vec<ResourceRecord> =
            message.name_servers().iter().map(convert_record).collect();
        let additional: Vec<ResourceRecord> =
            message.additionals().iter().map(convert_record).collect();

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = answers.len(),
            authority = authority.len(),
            additional = additional.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse::new(answers, authority, additional))
    }
}

fn convert_record(record: &Record) -> ResourceRecord {
    let data = match record.data() {
        RData::A(a) => RecordData::A(a.0),
        RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
        RData::CNAME(canonical) => RecordData::CNAME(canonical.to_ascii()),
        RData::NS(ns) => RecordData::NS(ns.to_ascii()),
        RData::MX(mx) => RecordData::MX {
            preference: mx.preference(),
            exchange: mx.exchange().to_ascii(),
        },
        _ => RecordData::Other {
            code: u16::from(record.record_type()),
        },
    };

    ResourceRecord::new(record.name().to_ascii(), record.ttl(), data)
}
