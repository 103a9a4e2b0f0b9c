use super::RecordType;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Typed RDATA for the record types the resolver understands.
///
/// Anything else is kept only as its numeric type code so the resolver can
/// still skip over it while scanning a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    MX { preference: u16, exchange: String },
    Other { code: u16 },
}

impl RecordData {
    pub fn type_code(&self) -> u16 {
        match self {
            RecordData::A(_) => RecordType::A.to_u16(),
            RecordData::AAAA(_) => RecordType::AAAA.to_u16(),
            RecordData::CNAME(_) => RecordType::CNAME.to_u16(),
            RecordData::NS(_) => RecordType::NS.to_u16(),
            RecordData::MX { .. } => RecordType::MX.to_u16(),
            RecordData::Other { code } => *code,
        }
    }
}

/// One resource record from any section of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn type_code(&self) -> u16 {
        self.data.type_code()
    }

    /// Exact numeric type-code comparison.
    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.type_code() == record_type.to_u16()
    }

    /// Address of an A record, used as glue.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn cname_target(&self) -> Option<&str> {
        match &self.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        }
    }
}
