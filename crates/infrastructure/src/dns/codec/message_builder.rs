//! DNS Message Builder
//!
//! Constructs iterative query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::domain::Label;
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DomainError, RecordType};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query and serialize it to wire format bytes.
    ///
    /// The message carries a random ID, a single IN-class question and a
    /// cleared RD flag: every server on the path is asked to answer from
    /// its own data or refer us onward.
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, DomainError> {
        let (_, bytes) = Self::build_query_with_id(domain, record_type)?;
        Ok(bytes)
    }

    /// Same as [`build_query`](Self::build_query) but also returns the ID.
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = parse_name(domain)?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

/// Turns a presentation-format name into a fully qualified `Name`.
///
/// Non-ASCII input is treated as an internationalized name and converted to
/// punycode. ASCII input is taken byte for byte, so names decoded from the
/// wire come back unchanged: `\c` stands for the literal byte `c` and
/// `\ooo` for an octal byte value, the escapes `Name::to_ascii` writes.
fn parse_name(domain: &str) -> Result<Name, DomainError> {
    let invalid = |reason: String| {
        DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, reason))
    };

    if !domain.is_ascii() {
        return Name::from_utf8(domain).map_err(|e| invalid(e.to_string()));
    }
    if domain == "." {
        return Ok(Name::root());
    }

    let mut labels = Vec::new();
    let mut label = Vec::new();
    let mut bytes = domain.bytes();

    while let Some(byte) = bytes.next() {
        match byte {
            b'.' => {
                labels.push(Label::from_raw_bytes(&label).map_err(|e| invalid(e.to_string()))?);
                label.clear();
            }
            b'\\' => label.push(unescape(&mut bytes).map_err(invalid)?),
            _ => label.push(byte),
        }
    }
    if !label.is_empty() {
        labels.push(Label::from_raw_bytes(&label).map_err(|e| invalid(e.to_string()))?);
    }

    Name::from_labels(labels).map_err(|e| invalid(e.to_string()))
}

fn unescape(bytes: &mut impl Iterator<Item = u8>) -> Result<u8, String> {
    let first = bytes.next().ok_or("dangling escape")?;
    if !first.is_ascii_digit() {
        return Ok(first);
    }

    let mut value = 0u32;
    for digit in [Some(first), bytes.next(), bytes.next()] {
        match digit {
            Some(d @ b'0'..=b'7') => value = value * 8 + u32::from(d - b'0'),
            _ => return Err("malformed octal escape".to_string()),
        }
    }
    u8::try_from(value).map_err(|_| format!("escape value {} out of range", value))
}
